//! Provider backed by an in-memory resource table.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::{Arc, Weak};

use crate::error::LoadError;
use crate::locator::Locator;
use crate::ports::{Provider, ProviderRef};
use crate::type_handle::TypeHandle;

/// A provider whose resources and types are declared up front.
///
/// Useful for hosts that embed their resources and for exercising the
/// resolver without touching the filesystem.
pub struct MemoryProvider {
    label: String,
    root: Option<Locator>,
    resources: BTreeMap<String, Vec<Locator>>,
    types: BTreeSet<String>,
    this: Weak<Self>,
}

impl MemoryProvider {
    /// Start declaring a provider named `label`.
    pub fn builder(label: impl Into<String>) -> MemoryProviderBuilder {
        MemoryProviderBuilder {
            label: label.into(),
            root: None,
            resources: BTreeMap::new(),
            types: BTreeSet::new(),
        }
    }

    /// The label this provider was declared with.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Builder for [`MemoryProvider`].
#[derive(Debug, Clone)]
pub struct MemoryProviderBuilder {
    label: String,
    root: Option<Locator>,
    resources: BTreeMap<String, Vec<Locator>>,
    types: BTreeSet<String>,
}

impl MemoryProviderBuilder {
    /// Locator returned for the empty name.
    #[must_use]
    pub fn root(mut self, locator: Locator) -> Self {
        self.root = Some(locator);
        self
    }

    /// Add a locator for `name`. Repeated names keep insertion order.
    #[must_use]
    pub fn resource(mut self, name: impl Into<String>, locator: Locator) -> Self {
        self.resources.entry(name.into()).or_default().push(locator);
        self
    }

    /// Declare a type defined by this provider.
    #[must_use]
    pub fn define_type(mut self, qualified_name: impl Into<String>) -> Self {
        self.types.insert(qualified_name.into());
        self
    }

    /// Finish the provider.
    pub fn build(self) -> Arc<MemoryProvider> {
        Arc::new_cyclic(|this| MemoryProvider {
            label: self.label,
            root: self.root,
            resources: self.resources,
            types: self.types,
            this: this.clone(),
        })
    }
}

impl Provider for MemoryProvider {
    fn identity(&self) -> String {
        format!("MemoryProvider({})", self.label)
    }

    fn resolve(&self, name: &str) -> Option<Locator> {
        if name.is_empty() {
            return self.root.clone();
        }
        self.resources
            .get(name)
            .and_then(|locators| locators.first())
            .cloned()
    }

    fn resolve_all(&self, name: &str) -> io::Result<Vec<Locator>> {
        if name.is_empty() {
            return Ok(self.root.iter().cloned().collect());
        }
        Ok(self.resources.get(name).cloned().unwrap_or_default())
    }

    fn load_type(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        if !self.types.contains(qualified_name) {
            return Err(LoadError::not_found(qualified_name, self.identity()));
        }
        let this: ProviderRef = self.this.upgrade().ok_or_else(|| LoadError::Failed {
            name: qualified_name.to_string(),
            reason: "provider has been dropped".to_string(),
        })?;
        Ok(TypeHandle::new(qualified_name, this))
    }
}
