//! Mapping resource and type names onto relative paths.

use std::path::{Component, Path, PathBuf};

/// The relative path a resource name refers to, if it stays inside a root.
///
/// Names use `/` separators. Absolute names, drive prefixes and `..`
/// components never resolve.
pub(crate) fn resource_path(name: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!relative.as_os_str().is_empty()).then_some(relative)
}

/// The relative definition path for a qualified type name.
///
/// `a::b::C` and `a.b.C` both map to `a/b/C.<extension>`.
pub(crate) fn type_path(qualified_name: &str, extension: &str) -> Result<PathBuf, String> {
    if qualified_name.trim().is_empty() {
        return Err("name is empty".to_string());
    }

    let normalized = qualified_name.replace("::", ".");
    let mut relative = PathBuf::new();
    for segment in normalized.split('.') {
        if segment.is_empty() {
            return Err("empty path segment".to_string());
        }
        if !segment.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
            return Err(format!("segment {segment:?} contains invalid characters"));
        }
        relative.push(segment);
    }
    relative.set_extension(extension);
    Ok(relative)
}
