//! Port definitions (trait abstractions) supplied by the host environment.
//!
//! The resolver never constructs providers or inspects where they search.
//! Everything it consults comes in through these traits.
//!
//! # Design Rules
//!
//! - Providers are opaque: identity, type name, lookups, nothing else
//! - Ambient state (the thread-bound provider, the global type registry)
//!   is injected as a port, never read from globals by the resolver
//! - Absence is `Option`, I/O faults are `io::Error`, type misses are
//!   `LoadError::NotFound`

pub mod context;
pub mod opener;
pub mod provider;
pub mod type_loader;

pub use context::{ExecutionContext, FixedContext};
pub use opener::StreamOpener;
pub use provider::{Provider, ProviderRef};
pub use type_loader::TypeLoader;

#[cfg(test)]
pub use provider::MockProvider;
#[cfg(test)]
pub use type_loader::MockTypeLoader;
