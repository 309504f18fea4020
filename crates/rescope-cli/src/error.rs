//! CLI-specific error types and mappings.
//!
//! Maps resolver, adapter and configuration errors to exit codes and
//! user-facing messages.

use rescope_core::{ConfigError, LoadError, ResolveError};
use rescope_fs::FsProviderError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Nothing in any tier matched the request.
    #[error("{0} not found in any provider")]
    NotFound(String),

    /// Configuration error (bad search path, bad policy value).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while reading a provider or a located resource.
    #[error("IO error: {0}")]
    Io(String),

    /// A type could not be loaded for a reason other than absence.
    #[error("Type loading failed: {0}")]
    Load(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: Not found
    /// - 65: Malformed input data
    /// - 74: I/O error
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 1,
            Self::Load(_) => 65, // EX_DATAERR
            Self::Io(_) => 74,   // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Io { .. } => Self::Io(err.to_string()),
            ResolveError::Load(LoadError::NotFound { name, .. }) => {
                Self::NotFound(format!("type {name}"))
            }
            ResolveError::Load(load) => Self::Load(load.to_string()),
            ResolveError::NoDefiningProvider { .. } => Self::Load(err.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<FsProviderError> for CliError {
    fn from(err: FsProviderError) -> Self {
        Self::Config(err.to_string())
    }
}
