//! Cat command handler.

use std::io::{self, Write};

use anyhow::Result;

use crate::{CliContext, CliError};

/// Stream the content of the first located `name` to `out`.
pub fn execute(ctx: &CliContext, name: &str, out: &mut dyn Write) -> Result<()> {
    let mut reader = ctx
        .resolver
        .resource_stream_from(name, &ctx.caller)
        .map_err(CliError::from)?
        .ok_or_else(|| CliError::NotFound(format!("resource {name}")))?;
    io::copy(&mut reader, out).map_err(|e| CliError::Io(e.to_string()))?;
    Ok(())
}
