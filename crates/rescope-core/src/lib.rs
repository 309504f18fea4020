//! Core domain types, provider ports and the fallback resolver for rescope.
//!
//! A process can have several provider scopes live at once: the one bound to
//! the running thread, the one that loaded this crate's host module, and the
//! one that loaded whichever code is asking. Which of them holds a given
//! resource depends on how the process was deployed. [`Resolver`] asks them
//! in a fixed priority order and reports each miss, so callers never need to
//! know which scope actually answered.
//!
//! # Layout
//!
//! - [`ports`]: traits the host supplies (providers, ambient context,
//!   global type loader, stream opener)
//! - [`adapters`]: in-process implementations of those ports
//! - [`resolver`]: the fallback chains
//! - [`diagnostics`]: log-only provider snapshots

#![deny(unused_crate_dependencies)]

pub mod adapters;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod locator;
pub mod ports;
pub mod resolver;
pub mod type_handle;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use adapters::{
    BuiltinTypes, ContextGuard, MemoryProvider, MemoryProviderBuilder, ThreadContext, UrlOpener,
};
pub use config::{EMPTY_LIST_POLICY_ENV, EmptyListPolicy, ResolverConfig};
pub use diagnostics::{DiagnosticRecord, describe};
pub use error::{ConfigError, LoadError, ResolveError};
pub use locator::Locator;
pub use ports::{ExecutionContext, FixedContext, Provider, ProviderRef, StreamOpener, TypeLoader};
pub use resolver::{Resolver, Tier, TypeTier, classpath_root_of, provider_of, resolve_in};
pub use type_handle::TypeHandle;
