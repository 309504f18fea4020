//! Stream-opening port.

use std::io::{self, Read};

use crate::locator::Locator;

/// Opens a located resource for reading.
pub trait StreamOpener: Send + Sync {
    /// Open the artifact behind `locator`.
    fn open(&self, locator: &Locator) -> io::Result<Box<dyn Read + Send>>;
}
