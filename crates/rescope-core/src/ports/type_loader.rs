//! Global type-loading port.
//!
//! Some hosts register types through a channel that no provider sees
//! (builtins, statically linked plugins). This port models that channel.
//! It is consulted as its own tier, between the context provider and the
//! module provider.

use crate::error::LoadError;
use crate::type_handle::TypeHandle;

/// The host's context-independent type lookup.
#[cfg_attr(test, mockall::automock)]
pub trait TypeLoader: Send + Sync {
    /// Load a type by fully-qualified name.
    ///
    /// Returns [`LoadError::NotFound`] when the host has no such type.
    fn load_type(&self, qualified_name: &str) -> Result<TypeHandle, LoadError>;
}
