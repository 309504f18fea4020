//! Errors constructing filesystem providers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a [`DirectoryProvider`](crate::DirectoryProvider).
#[derive(Debug, Error)]
pub enum FsProviderError {
    /// Search roots must be absolute so their locators are stable.
    #[error("Search root {0} is not absolute")]
    RelativeRoot(PathBuf),

    /// The type-definition extension is empty or contains a separator.
    #[error("Invalid type extension {0:?}")]
    InvalidExtension(String),
}
