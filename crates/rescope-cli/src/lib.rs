//! Command-line diagnostics for rescope.
//!
//! The binary wires directory-backed providers into a
//! [`Resolver`](rescope_core::Resolver) and exposes each resolver operation
//! as a subcommand, so operators can see which scope answers a lookup and
//! why a lookup misses.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CALLER_TYPE_NAME, CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
