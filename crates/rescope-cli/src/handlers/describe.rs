//! Describe command handler.
//!
//! Prints one JSON object per tier so the output can be piped into `jq`.

use std::io::Write;

use anyhow::Result;
use rescope_core::{Tier, describe, provider_of};
use serde_json::json;

use crate::CliContext;

/// Print the diagnostic record of each tier's provider, in tier order.
///
/// A caller without a defining provider is reported with an `error` key
/// instead of a record.
pub fn execute(ctx: &CliContext, out: &mut dyn Write) -> Result<()> {
    for tier in Tier::CHAIN {
        let provider = match tier {
            Tier::Context => Ok(ctx.resolver.current_context_provider()),
            Tier::Module => Ok(ctx.resolver.module_provider()),
            Tier::Caller => provider_of(&ctx.caller),
        };
        let line = match provider {
            Ok(provider) => json!({ "tier": tier.as_str(), "record": describe(&*provider) }),
            Err(err) => json!({ "tier": tier.as_str(), "error": err.to_string() }),
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}
