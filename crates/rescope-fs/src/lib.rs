//! Filesystem-backed providers for rescope.
//!
//! [`DirectoryProvider`] searches an ordered list of root directories, the
//! way a search path or class path does.

#![deny(unused_crate_dependencies)]

mod directory;
mod error;
mod names;

pub use directory::{DEFAULT_TYPE_EXTENSION, DirectoryProvider};
pub use error::FsProviderError;
