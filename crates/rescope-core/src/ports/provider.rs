//! The provider port: one search scope for resources and types.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::error::LoadError;
use crate::locator::Locator;
use crate::type_handle::TypeHandle;

/// A capability that can locate resources and load types from one scope.
///
/// Implementations are supplied by the host and must be safe to call from
/// several threads at once. The resolver holds no state between calls, so
/// it never caches anything a provider returns.
///
/// By convention `resolve("")` yields the root locator of the provider's
/// search path. Diagnostics depend on this.
#[cfg_attr(test, mockall::automock)]
pub trait Provider: Send + Sync {
    /// Human-readable identity, used in diagnostics only.
    fn identity(&self) -> String;

    /// Concrete implementation type name, used in diagnostics only.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Locate a single resource. `None` means the scope does not hold it.
    fn resolve(&self, name: &str) -> Option<Locator>;

    /// Locate every resource with this name, in the provider's search order.
    ///
    /// Fails only on a genuine storage fault; a name held nowhere is an
    /// empty list.
    fn resolve_all(&self, name: &str) -> io::Result<Vec<Locator>>;

    /// Load a type by fully-qualified name.
    ///
    /// Returns [`LoadError::NotFound`] when the type is not in this scope.
    fn load_type(&self, qualified_name: &str) -> Result<TypeHandle, LoadError>;
}

/// Shared handle to a host-supplied provider.
pub type ProviderRef = Arc<dyn Provider>;

impl fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Provider").field(&self.identity()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryProvider;

    #[test]
    fn debug_shows_identity() {
        let provider: ProviderRef = MemoryProvider::builder("plugins").build();
        assert_eq!(format!("{provider:?}"), "Provider(\"MemoryProvider(plugins)\")");
    }
}
