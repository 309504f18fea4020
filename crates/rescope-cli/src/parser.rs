//! Main CLI parser and top-level argument handling.

use std::ffi::OsString;

use clap::Parser;
use rescope_core::EmptyListPolicy;

use crate::commands::Commands;

/// Resolve resources and types across context, module and caller search paths.
///
/// Each search path is a platform path list (`:`-separated on Unix).
#[derive(Parser, Debug)]
#[command(name = "rescope")]
#[command(about = "Resolve resources and types across provider search paths")]
#[command(version)]
pub struct Cli {
    /// Search path of the provider bound to the execution context
    #[arg(long, env = "RESCOPE_CONTEXT_PATH", global = true)]
    pub context_path: Option<OsString>,

    /// Search path of the resolver's own module provider
    #[arg(long, env = "RESCOPE_MODULE_PATH", global = true)]
    pub module_path: Option<OsString>,

    /// Search path of the requesting caller's provider
    #[arg(long, env = "RESCOPE_CALLER_PATH", global = true)]
    pub caller_path: Option<OsString>,

    /// Register a builtin type for the global type-loading tier
    #[arg(long = "builtin-type", value_name = "NAME", global = true)]
    pub builtin_types: Vec<String>,

    /// How empty multi-resource results are treated (fall-through | accept)
    #[arg(long, global = true)]
    pub list_policy: Option<EmptyListPolicy>,

    /// File extension of type-definition files
    #[arg(long, default_value = "type", global = true)]
    pub type_extension: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
