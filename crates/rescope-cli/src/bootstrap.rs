//! Composition root: turns CLI configuration into a wired resolver.
//!
//! This is the ONLY place where providers are constructed. Handlers receive
//! a [`CliContext`] and never touch the filesystem adapter directly.

use std::ffi::OsString;

use rescope_core::{
    BuiltinTypes, EmptyListPolicy, FixedContext, ProviderRef, Resolver, ResolverConfig,
    TypeHandle,
};
use rescope_fs::DirectoryProvider;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Qualified name of the synthetic type standing in for the requesting caller.
pub const CALLER_TYPE_NAME: &str = "rescope_cli::Caller";

/// Everything needed to build the resolver, detached from argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Search path of the context provider; `None` uses the module provider.
    pub context_path: Option<OsString>,
    /// Search path of the module provider; `None` searches nothing.
    pub module_path: Option<OsString>,
    /// Search path of the caller provider; `None` makes the caller builtin.
    pub caller_path: Option<OsString>,
    /// Names registered with the global type loader.
    pub builtin_types: Vec<String>,
    /// Overrides `RESCOPE_EMPTY_LIST_POLICY` when set.
    pub list_policy: Option<EmptyListPolicy>,
    /// Extension of type-definition files.
    pub type_extension: String,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            context_path: cli.context_path.clone(),
            module_path: cli.module_path.clone(),
            caller_path: cli.caller_path.clone(),
            builtin_types: cli.builtin_types.clone(),
            list_policy: cli.list_policy,
            type_extension: cli.type_extension.clone(),
        }
    }
}

/// Wired dependencies shared by all handlers.
pub struct CliContext {
    /// The resolver under inspection.
    pub resolver: Resolver,
    /// Handle representing the code that makes requests.
    pub caller: TypeHandle,
}

/// Build the resolver described by `config`.
///
/// The base [`ResolverConfig`] comes from the environment; an explicit
/// list policy overrides it.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let mut resolver_config = ResolverConfig::from_env()?;
    if let Some(policy) = config.list_policy {
        resolver_config.empty_list_policy = policy;
    }

    let module = directory("module", config.module_path.as_ref(), &config.type_extension)?;
    let mut resolver = Resolver::new(module)
        .with_type_loader(config.builtin_types.iter().cloned().collect::<BuiltinTypes>())
        .with_config(resolver_config);

    if let Some(path) = &config.context_path {
        let context = directory("context", Some(path), &config.type_extension)?;
        resolver = resolver.with_context(FixedContext::new(context));
    }

    let caller = match &config.caller_path {
        Some(path) => TypeHandle::new(
            CALLER_TYPE_NAME,
            directory("caller", Some(path), &config.type_extension)?,
        ),
        None => TypeHandle::builtin(CALLER_TYPE_NAME),
    };

    debug!(
        builtin_types = config.builtin_types.len(),
        policy = %resolver.config().empty_list_policy,
        "Resolver bootstrapped"
    );
    Ok(CliContext { resolver, caller })
}

fn directory(
    label: &str,
    search_path: Option<&OsString>,
    extension: &str,
) -> Result<ProviderRef, CliError> {
    let provider: ProviderRef = match search_path {
        Some(path) => DirectoryProvider::from_search_path(label, path, extension)?,
        None => DirectoryProvider::with_type_extension(label, Vec::<OsString>::new(), extension)?,
    };
    Ok(provider)
}
