//! Root command handler.

use std::io::Write;

use anyhow::Result;

use crate::{CliContext, CliError};

/// Print the root locator of the module provider.
pub fn execute(ctx: &CliContext, out: &mut dyn Write) -> Result<()> {
    let root = ctx
        .resolver
        .classpath_root()
        .ok_or_else(|| CliError::NotFound("module root".to_string()))?;
    writeln!(out, "{root}")?;
    Ok(())
}
