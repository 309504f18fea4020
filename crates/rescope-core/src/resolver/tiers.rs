//! Names and priority order of the fallback tiers.

use std::fmt;

/// One step of the resource fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Provider bound to the current execution context.
    Context,
    /// Provider that defined the resolver's own module.
    Module,
    /// Provider that defined the requesting caller's type.
    Caller,
}

impl Tier {
    /// Resource lookup order, highest priority first.
    pub const CHAIN: [Self; 3] = [Self::Context, Self::Module, Self::Caller];

    /// Convert to string representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Module => "module",
            Self::Caller => "caller",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the type-loading fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTier {
    /// Provider bound to the current execution context.
    Context,
    /// The host's global type loader.
    Global,
    /// Provider that defined the resolver's own module.
    Module,
    /// Provider that defined the requesting caller's type.
    Caller,
}

impl TypeTier {
    /// Type loading order, highest priority first.
    pub const CHAIN: [Self; 4] = [Self::Context, Self::Global, Self::Module, Self::Caller];

    /// Convert to string representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Global => "global",
            Self::Module => "module",
            Self::Caller => "caller",
        }
    }
}

impl fmt::Display for TypeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
