//! Provider backed by an ordered list of root directories.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use rescope_core::{LoadError, Locator, Provider, ProviderRef, TypeHandle};
use tracing::trace;

use crate::error::FsProviderError;
use crate::names::{resource_path, type_path};

/// Default extension of type-definition files.
pub const DEFAULT_TYPE_EXTENSION: &str = "type";

/// A provider that searches root directories in order.
///
/// - The empty name resolves to the first root.
/// - A resource resolves to the first root containing it.
/// - A type `a::b::C` (or `a.b.C`) is defined here when some root holds
///   `a/b/C.<extension>`.
pub struct DirectoryProvider {
    label: String,
    roots: Vec<PathBuf>,
    type_extension: String,
    this: Weak<Self>,
}

impl DirectoryProvider {
    /// Create a provider searching `roots` with the default type extension.
    pub fn new<I, P>(label: impl Into<String>, roots: I) -> Result<Arc<Self>, FsProviderError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_type_extension(label, roots, DEFAULT_TYPE_EXTENSION)
    }

    /// Create a provider whose type definitions use `extension`.
    pub fn with_type_extension<I, P>(
        label: impl Into<String>,
        roots: I,
        extension: &str,
    ) -> Result<Arc<Self>, FsProviderError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\', '.']) {
            return Err(FsProviderError::InvalidExtension(extension.to_string()));
        }

        let roots = roots
            .into_iter()
            .map(Into::into)
            .map(|root: PathBuf| {
                if root.is_absolute() {
                    Ok(root)
                } else {
                    Err(FsProviderError::RelativeRoot(root))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let label = label.into();
        Ok(Arc::new_cyclic(|this| Self {
            label,
            roots,
            type_extension: extension.to_string(),
            this: this.clone(),
        }))
    }

    /// Create a provider from a platform search-path list (`PATH` syntax).
    ///
    /// Empty entries are skipped.
    pub fn from_search_path(
        label: impl Into<String>,
        search_path: &OsStr,
        extension: &str,
    ) -> Result<Arc<Self>, FsProviderError> {
        let roots = std::env::split_paths(search_path).filter(|p| !p.as_os_str().is_empty());
        Self::with_type_extension(label, roots, extension)
    }

    /// Search roots, in priority order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// The label this provider was created with.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn candidates<'a>(&'a self, relative: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.roots.iter().map(move |root| root.join(relative))
    }
}

impl Provider for DirectoryProvider {
    fn identity(&self) -> String {
        let roots: Vec<_> = self.roots.iter().map(|r| r.display().to_string()).collect();
        format!("{}[{}]", self.label, roots.join(", "))
    }

    fn resolve(&self, name: &str) -> Option<Locator> {
        if name.is_empty() {
            return self.roots.first().and_then(Locator::from_directory_path);
        }
        let relative = resource_path(name)?;
        let found = self
            .candidates(&relative)
            .find(|path| matches!(path.try_exists(), Ok(true)))?;
        trace!(resource = name, path = %found.display(), "Resolved in directory");
        Locator::from_file_path(found)
    }

    fn resolve_all(&self, name: &str) -> io::Result<Vec<Locator>> {
        if name.is_empty() {
            return Ok(self
                .roots
                .iter()
                .filter_map(Locator::from_directory_path)
                .collect());
        }
        let Some(relative) = resource_path(name) else {
            return Ok(Vec::new());
        };

        let mut locators = Vec::new();
        for path in self.candidates(&relative) {
            match fs::metadata(&path) {
                Ok(_) => locators.extend(Locator::from_file_path(&path)),
                Err(err)
                    if matches!(
                        err.kind(),
                        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                    ) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(locators)
    }

    fn load_type(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        let relative = type_path(qualified_name, &self.type_extension).map_err(|reason| {
            LoadError::InvalidName {
                name: qualified_name.to_string(),
                reason,
            }
        })?;

        if !self.candidates(&relative).any(|path| path.is_file()) {
            return Err(LoadError::not_found(qualified_name, self.identity()));
        }

        let this: ProviderRef = self.this.upgrade().ok_or_else(|| LoadError::Failed {
            name: qualified_name.to_string(),
            reason: "provider has been dropped".to_string(),
        })?;
        Ok(TypeHandle::new(qualified_name, this))
    }
}
