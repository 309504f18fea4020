//! Error types for resource resolution and type loading.
//!
//! Two kinds of "failure" flow through the resolver and must never be
//! conflated:
//!
//! - A missing resource is not an error at all. Resource lookups return
//!   `Option<Locator>` and absence is a normal outcome.
//! - A missing type is a [`LoadError::NotFound`]. It drives fallthrough in
//!   the type-loading chain and is surfaced verbatim when every tier fails.
//!
//! Genuine I/O faults are [`ResolveError::Io`] and are never retried
//! against another provider.

use std::io;

use thiserror::Error;

/// Errors raised by a provider or the global type loader while loading a type.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The type is not defined in this provider's scope.
    #[error("Type {name} not found in {provider}")]
    NotFound { name: String, provider: String },

    /// The qualified name cannot name a type at all.
    #[error("Invalid type name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The type exists but could not be loaded.
    #[error("Failed to load type {name}: {reason}")]
    Failed { name: String, reason: String },
}

impl LoadError {
    /// Shorthand for a [`LoadError::NotFound`].
    pub fn not_found(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            provider: provider.into(),
        }
    }

    /// Whether this is the not-found signal that lets the next tier be tried.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors surfaced by [`Resolver`](crate::Resolver) operations.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A provider's underlying storage failed while looking up a resource.
    #[error("I/O error while resolving {resource:?}: {source}")]
    Io {
        resource: String,
        #[source]
        source: io::Error,
    },

    /// Type loading failed in the last tier tried.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The type has no defining provider (e.g. a builtin type).
    #[error("Type {type_name} has no defining provider")]
    NoDefiningProvider { type_name: String },
}

impl ResolveError {
    pub(crate) fn io(resource: &str, source: io::Error) -> Self {
        Self::Io {
            resource: resource.to_string(),
            source,
        }
    }
}

/// Errors reading resolver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration key holds a value outside its accepted set.
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}
