//! Opening resolved resources.

use std::io::Read;

use super::Resolver;
use crate::error::ResolveError;
use crate::type_handle::TypeHandle;

impl Resolver {
    /// Resolve `name` through the fallback tiers and open it for reading.
    ///
    /// `Ok(None)` when no tier holds the resource. A failure to open a
    /// located resource is an I/O error, not an absence.
    pub fn resource_stream_from(
        &self,
        name: &str,
        caller: &TypeHandle,
    ) -> Result<Option<Box<dyn Read + Send>>, ResolveError> {
        let Some(locator) = self.resolve_resource_from(name, caller) else {
            return Ok(None);
        };
        self.opener
            .open(&locator)
            .map(Some)
            .map_err(|source| ResolveError::io(name, source))
    }
}
