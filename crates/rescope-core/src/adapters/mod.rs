//! In-process adapters for the core ports.
//!
//! Filesystem-backed providers live in `rescope-fs`; what is here needs
//! nothing beyond the standard library and the `file:` scheme.

mod builtin_types;
mod memory;
mod thread_context;
mod url_opener;

pub use builtin_types::BuiltinTypes;
pub use memory::{MemoryProvider, MemoryProviderBuilder};
pub use thread_context::{ContextGuard, ThreadContext};
pub use url_opener::UrlOpener;
