//! Registry of builtin types for the global type-loading tier.

use std::collections::BTreeSet;

use crate::error::LoadError;
use crate::ports::TypeLoader;
use crate::type_handle::TypeHandle;

/// Qualified names the host knows without any provider.
///
/// Loaded handles are builtin: they have no defining provider.
#[derive(Debug, Clone, Default)]
pub struct BuiltinTypes {
    names: BTreeSet<String>,
}

impl BuiltinTypes {
    /// An empty registry; every lookup is not-found.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `qualified_name` and return the registry.
    #[must_use]
    pub fn with_type(mut self, qualified_name: impl Into<String>) -> Self {
        self.register(qualified_name);
        self
    }

    /// Register `qualified_name`.
    pub fn register(&mut self, qualified_name: impl Into<String>) {
        self.names.insert(qualified_name.into());
    }

    /// Whether `qualified_name` is registered.
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.names.contains(qualified_name)
    }
}

impl<S: Into<String>> FromIterator<S> for BuiltinTypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl TypeLoader for BuiltinTypes {
    fn load_type(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        if self.contains(qualified_name) {
            Ok(TypeHandle::builtin(qualified_name))
        } else {
            Err(LoadError::not_found(qualified_name, "builtin types"))
        }
    }
}
