//! Descriptors of loaded types.

use std::fmt;
use std::sync::Arc;

use crate::ports::ProviderRef;

/// A loaded type, identified by its fully-qualified name.
///
/// The resolver only ever uses a handle to find the provider that defined
/// it. Builtin types have no defining provider.
#[derive(Clone)]
pub struct TypeHandle {
    qualified_name: Arc<str>,
    defining_provider: Option<ProviderRef>,
}

impl TypeHandle {
    /// A type defined by `provider`.
    pub fn new(qualified_name: impl Into<Arc<str>>, provider: ProviderRef) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            defining_provider: Some(provider),
        }
    }

    /// A builtin type with no defining provider.
    pub fn builtin(qualified_name: impl Into<Arc<str>>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            defining_provider: None,
        }
    }

    /// Fully-qualified name, e.g. `app::config::Loader`.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Last path segment of the qualified name.
    ///
    /// Both `::` and `.` are treated as separators.
    pub fn simple_name(&self) -> &str {
        let name = &*self.qualified_name;
        let after_colons = name.rsplit("::").next().unwrap_or(name);
        after_colons.rsplit('.').next().unwrap_or(after_colons)
    }

    /// The provider that defined this type, if any.
    pub const fn defining_provider(&self) -> Option<&ProviderRef> {
        self.defining_provider.as_ref()
    }

    /// Whether `provider` is the very provider instance that defined this type.
    pub fn is_defined_by(&self, provider: &ProviderRef) -> bool {
        self.defining_provider
            .as_ref()
            .is_some_and(|own| same_provider(own, provider))
    }
}

/// Identity comparison for providers, ignoring vtable differences.
pub(crate) fn same_provider(a: &ProviderRef, b: &ProviderRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("qualified_name", &self.qualified_name)
            .field(
                "defining_provider",
                &self.defining_provider.as_ref().map(|p| p.identity()),
            )
            .finish()
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}
