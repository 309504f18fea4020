//! The fallback resolver.
//!
//! A [`Resolver`] knows three scopes and asks them in a fixed order:
//!
//! 1. the provider bound to the current execution context,
//! 2. the provider that defined the resolver's own module,
//! 3. the provider that defined the requesting caller's type.
//!
//! Type loading adds the host's global type loader between 1 and 2.
//! Providers are looked up afresh on every call and only when their tier is
//! actually reached. Nothing is cached.

mod resources;
mod stream;
mod tiers;
mod types;

use std::sync::Arc;

use tracing::debug;

use crate::adapters::{BuiltinTypes, ThreadContext, UrlOpener};
use crate::config::ResolverConfig;
use crate::diagnostics::describe;
use crate::error::ResolveError;
use crate::ports::{ExecutionContext, ProviderRef, StreamOpener, TypeLoader};
use crate::type_handle::TypeHandle;

pub use resources::{classpath_root_of, resolve_in};
pub use tiers::{Tier, TypeTier};

/// Resolves resources and types across the context, module and caller scopes.
///
/// # Example
///
/// ```ignore
/// let resolver = Resolver::new(module_provider)
///     .with_context(ThreadContext::new(default_provider))
///     .with_type_loader(BuiltinTypes::new().with_type("core::Text"));
///
/// let locator = resolver.resolve_resource_from("config.json", &caller);
/// ```
#[derive(Clone)]
pub struct Resolver {
    module: ProviderRef,
    context: Arc<dyn ExecutionContext>,
    types: Arc<dyn TypeLoader>,
    opener: Arc<dyn StreamOpener>,
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver whose own module was defined by `module`.
    ///
    /// Defaults: a [`ThreadContext`] falling back to `module`, an empty
    /// [`BuiltinTypes`] registry, the [`UrlOpener`] and default config.
    pub fn new(module: ProviderRef) -> Self {
        Self {
            context: Arc::new(ThreadContext::new(module.clone())),
            types: Arc::new(BuiltinTypes::new()),
            opener: Arc::new(UrlOpener),
            config: ResolverConfig::default(),
            module,
        }
    }

    /// Replace the source of the context provider.
    #[must_use]
    pub fn with_context(mut self, context: impl ExecutionContext + 'static) -> Self {
        self.context = Arc::new(context);
        self
    }

    /// Replace the global type loader.
    #[must_use]
    pub fn with_type_loader(mut self, types: impl TypeLoader + 'static) -> Self {
        self.types = Arc::new(types);
        self
    }

    /// Replace the stream opener.
    #[must_use]
    pub fn with_opener(mut self, opener: impl StreamOpener + 'static) -> Self {
        self.opener = Arc::new(opener);
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The provider bound to the current execution context.
    pub fn current_context_provider(&self) -> ProviderRef {
        let provider = self.context.current_provider();
        debug!(provider = %describe(&*provider), "Context provider");
        provider
    }

    /// The provider that defined the resolver's own module.
    pub fn module_provider(&self) -> ProviderRef {
        debug!(provider = %describe(&*self.module), "Module provider");
        self.module.clone()
    }

    fn tier_provider(&self, tier: Tier, caller: &TypeHandle) -> Result<ProviderRef, ResolveError> {
        match tier {
            Tier::Context => Ok(self.current_context_provider()),
            Tier::Module => Ok(self.module_provider()),
            Tier::Caller => provider_of(caller),
        }
    }
}

/// The provider that defined `handle`.
///
/// Builtin types have none; that is reported as
/// [`ResolveError::NoDefiningProvider`] and left to the caller to handle.
pub fn provider_of(handle: &TypeHandle) -> Result<ProviderRef, ResolveError> {
    let provider = handle
        .defining_provider()
        .cloned()
        .ok_or_else(|| ResolveError::NoDefiningProvider {
            type_name: handle.qualified_name().to_string(),
        })?;
    debug!(
        type_name = handle.simple_name(),
        provider = %describe(&*provider),
        "Defining provider"
    );
    Ok(provider)
}
