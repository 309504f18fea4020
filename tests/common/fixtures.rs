//! Temporary search roots.

use std::fs;
use std::path::{Path, PathBuf};

use rescope::{DirectoryProvider, Locator, ProviderRef};
use tempfile::TempDir;

/// A directory-backed provider over its own temporary root.
pub struct Root {
    pub dir: TempDir,
    pub provider: ProviderRef,
}

impl Root {
    pub fn new(label: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp root");
        let provider: ProviderRef =
            DirectoryProvider::new(label, [dir.path()]).expect("absolute root");
        Self { dir, provider }
    }

    /// Write `content` at `relative` and return the file's locator.
    pub fn write(&self, relative: &str, content: &str) -> Locator {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
        fs::write(&path, content).expect("write fixture");
        Locator::from_file_path(&path).expect("absolute path")
    }

    /// Create an empty type-definition file for `qualified_name`.
    pub fn define_type(&self, qualified_name: &str) {
        let relative = format!("{}.type", qualified_name.replace("::", "/"));
        self.write(&relative, "");
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
