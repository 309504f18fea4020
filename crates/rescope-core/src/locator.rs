//! Opaque references to located artifacts.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

/// Address of a located resource.
///
/// A locator carries an address only, never content. Two locators are equal
/// when their addresses are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(Url);

impl Locator {
    /// Parse a locator from an absolute URL string.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self)
    }

    /// Build a `file:` locator for an absolute file path.
    ///
    /// Returns `None` for relative paths.
    pub fn from_file_path(path: impl AsRef<Path>) -> Option<Self> {
        Url::from_file_path(path).ok().map(Self)
    }

    /// Build a `file:` locator for an absolute directory path.
    ///
    /// The resulting URL ends with `/` so relative names join beneath it.
    pub fn from_directory_path(path: impl AsRef<Path>) -> Option<Self> {
        Url::from_directory_path(path).ok().map(Self)
    }

    /// The underlying URL.
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// The address as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// URL scheme, e.g. `file`.
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Local path for `file:` locators.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.0.scheme() == "file" {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }
}

impl From<Url> for Locator {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
