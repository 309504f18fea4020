//! Subcommand definitions.

use clap::Subcommand;

/// Top-level commands, one per resolver operation.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate a resource through the context, module and caller tiers
    Locate {
        /// Resource name, `/`-separated
        name: String,
    },
    /// Locate every copy of a resource, tier by tier
    LocateAll {
        /// Resource name, `/`-separated
        name: String,
    },
    /// Locate a resource and write its content to stdout
    Cat {
        /// Resource name, `/`-separated
        name: String,
    },
    /// Load a type through the context, global, module and caller tiers
    LoadType {
        /// Fully-qualified type name (`a::b::C` or `a.b.C`)
        qualified_name: String,
    },
    /// Print the module provider's root locator
    Root,
    /// Print the diagnostic record of each tier's provider as JSON lines
    Describe,
}
