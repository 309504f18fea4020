//! Default stream opener for `file:` locators.

use std::fs::File;
use std::io::{self, BufReader, Read};

use crate::locator::Locator;
use crate::ports::StreamOpener;

/// Opens `file:` locators from the local filesystem.
///
/// Any other scheme is reported as [`io::ErrorKind::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlOpener;

impl StreamOpener for UrlOpener {
    fn open(&self, locator: &Locator) -> io::Result<Box<dyn Read + Send>> {
        let path = locator.to_file_path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Unsupported,
                format!("cannot open {} locator {locator}", locator.scheme()),
            )
        })?;
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
