//! Thread-bound execution context.

use std::cell::RefCell;
use std::marker::PhantomData;

use tracing::debug;

use crate::ports::{ExecutionContext, ProviderRef};
use crate::type_handle::same_provider;

thread_local! {
    static BOUND: RefCell<Option<ProviderRef>> = const { RefCell::new(None) };
}

/// Execution context backed by a per-thread binding.
///
/// Threads that never bound a provider see the default one.
#[derive(Clone)]
pub struct ThreadContext {
    default: ProviderRef,
}

impl ThreadContext {
    /// Context that falls back to `default` on unbound threads.
    pub fn new(default: ProviderRef) -> Self {
        Self { default }
    }

    /// Bind `provider` to the calling thread until the guard drops.
    ///
    /// Bindings nest: dropping the guard restores whatever was bound before.
    #[must_use = "the binding is removed when the guard is dropped"]
    pub fn bind(provider: ProviderRef) -> ContextGuard {
        debug!(provider = %provider.identity(), "Binding context provider to thread");
        let previous = BOUND.with(|bound| bound.replace(Some(provider.clone())));
        ContextGuard {
            installed: provider,
            previous,
            _not_send: PhantomData,
        }
    }

    /// The provider bound to the calling thread, if any.
    pub fn bound() -> Option<ProviderRef> {
        BOUND.with(|bound| bound.borrow().clone())
    }
}

impl ExecutionContext for ThreadContext {
    fn current_provider(&self) -> ProviderRef {
        Self::bound().unwrap_or_else(|| self.default.clone())
    }
}

/// Restores the previous thread binding on drop.
///
/// Not `Send`: it must drop on the thread that created it. Nested guards
/// must drop in reverse order of binding; debug builds assert this.
pub struct ContextGuard {
    installed: ProviderRef,
    previous: Option<ProviderRef>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        BOUND.with(|bound| {
            let mut current = bound.borrow_mut();
            debug_assert!(
                current
                    .as_ref()
                    .is_some_and(|provider| same_provider(provider, &self.installed)),
                "context guard dropped out of order"
            );
            *current = previous;
        });
    }
}
