//! Provider wrapper that counts lookups.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rescope::{LoadError, Locator, Provider, ProviderRef, TypeHandle};

/// Delegates to an inner provider and counts every non-root lookup.
///
/// Root lookups (`resolve("")`) come from diagnostics and are not counted.
pub struct Counting {
    inner: ProviderRef,
    resolves: AtomicUsize,
    lists: AtomicUsize,
    loads: AtomicUsize,
}

impl Counting {
    pub fn wrap(inner: ProviderRef) -> Arc<Self> {
        Arc::new(Self {
            inner,
            resolves: AtomicUsize::new(0),
            lists: AtomicUsize::new(0),
            loads: AtomicUsize::new(0),
        })
    }

    pub fn resolves(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }

    pub fn lists(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl Provider for Counting {
    fn identity(&self) -> String {
        self.inner.identity()
    }

    fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    fn resolve(&self, name: &str) -> Option<Locator> {
        if !name.is_empty() {
            self.resolves.fetch_add(1, Ordering::SeqCst);
        }
        self.inner.resolve(name)
    }

    fn resolve_all(&self, name: &str) -> io::Result<Vec<Locator>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve_all(name)
    }

    fn load_type(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load_type(qualified_name)
    }
}
