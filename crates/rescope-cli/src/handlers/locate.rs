//! Locate and locate-all command handlers.

use std::io::Write;

use anyhow::Result;

use crate::{CliContext, CliError};

/// Print the locator of `name` from the first tier that holds it.
pub fn execute(ctx: &CliContext, name: &str, out: &mut dyn Write) -> Result<()> {
    let locator = ctx
        .resolver
        .resolve_resource_from(name, &ctx.caller)
        .ok_or_else(|| CliError::NotFound(format!("resource {name}")))?;
    writeln!(out, "{locator}")?;
    Ok(())
}

/// Print every locator of `name` from the first tier with results.
pub fn execute_all(ctx: &CliContext, name: &str, out: &mut dyn Write) -> Result<()> {
    let locators = ctx
        .resolver
        .resolve_resources_from(name, &ctx.caller)
        .map_err(CliError::from)?;
    if locators.is_empty() {
        return Err(CliError::NotFound(format!("resource {name}")).into());
    }
    for locator in locators {
        writeln!(out, "{locator}")?;
    }
    Ok(())
}
