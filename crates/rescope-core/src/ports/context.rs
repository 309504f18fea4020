//! Ambient execution-context port.
//!
//! Hosts usually bind a provider to the running thread (a request handler,
//! a plugin host, a test harness). The resolver asks this port for it
//! instead of reading thread-local state directly, which keeps the fallback
//! chain deterministic under test.

use super::provider::ProviderRef;

/// Source of the provider bound to the current execution context.
pub trait ExecutionContext: Send + Sync {
    /// The provider bound to the calling thread's execution context.
    fn current_provider(&self) -> ProviderRef;
}

/// An execution context that always yields the same provider.
#[derive(Clone)]
pub struct FixedContext(ProviderRef);

impl FixedContext {
    /// Bind `provider` as the context provider for every call.
    pub fn new(provider: ProviderRef) -> Self {
        Self(provider)
    }
}

impl ExecutionContext for FixedContext {
    fn current_provider(&self) -> ProviderRef {
        self.0.clone()
    }
}

impl<F> ExecutionContext for F
where
    F: Fn() -> ProviderRef + Send + Sync,
{
    fn current_provider(&self) -> ProviderRef {
        self()
    }
}
