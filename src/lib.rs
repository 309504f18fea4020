//! # rescope
//!
//! Facade over the rescope workspace crates:
//!
//! - `rescope_core` - Domain types, provider ports and the fallback resolver
//! - `rescope_fs` - Directory-backed providers
//!
//! Libraries that only need the resolver should depend on `rescope-core`
//! directly; this crate exists for applications that want both under one
//! name.

// =============================================================================
// Workspace Crate Re-exports
// =============================================================================

pub use rescope_core::{
    BuiltinTypes, ConfigError, ContextGuard, DiagnosticRecord, EmptyListPolicy, ExecutionContext,
    FixedContext, LoadError, Locator, MemoryProvider, Provider, ProviderRef, ResolveError,
    Resolver, ResolverConfig, StreamOpener, ThreadContext, Tier, TypeHandle, TypeLoader,
    TypeTier, UrlOpener, classpath_root_of, describe, provider_of, resolve_in,
};
pub use rescope_fs::{DEFAULT_TYPE_EXTENSION, DirectoryProvider, FsProviderError};

/// Re-export of rescope-core for convenience.
pub mod core {
    pub use rescope_core::*;
}

/// Re-export of rescope-fs for convenience.
pub mod fs {
    pub use rescope_fs::*;
}
