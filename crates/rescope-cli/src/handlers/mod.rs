//! Command handlers.
//!
//! Each handler runs one resolver operation against a [`CliContext`] and
//! writes its result to the given writer.
//!
//! [`CliContext`]: crate::CliContext

pub mod cat;
pub mod describe;
pub mod load_type;
pub mod locate;
pub mod root;
