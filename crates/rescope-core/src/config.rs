//! Resolver configuration.
//!
//! Configuration is read from environment variables by default. Lookup goes
//! through [`ResolverConfig::from_lookup`] so callers (and tests) can supply
//! values without touching the process environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable selecting the [`EmptyListPolicy`].
pub const EMPTY_LIST_POLICY_ENV: &str = "RESCOPE_EMPTY_LIST_POLICY";

/// How a multi-resource lookup treats a tier that returns an empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyListPolicy {
    /// An empty list counts as "not found" and the next tier is tried.
    #[default]
    FallThrough,
    /// The first tier's list is returned even when empty; later tiers are
    /// only reached when an earlier tier is unavailable.
    Accept,
}

impl EmptyListPolicy {
    /// Convert to string representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FallThrough => "fall-through",
            Self::Accept => "accept",
        }
    }
}

impl fmt::Display for EmptyListPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyListPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "fall-through" | "fallthrough" => Ok(Self::FallThrough),
            "accept" => Ok(Self::Accept),
            _ => Err(ConfigError::InvalidValue {
                key: "empty_list_policy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Tunables for a [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Treatment of empty multi-resource results.
    pub empty_list_policy: EmptyListPolicy,
}

impl ResolverConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, keyed by environment variable name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(EMPTY_LIST_POLICY_ENV) {
            if !raw.trim().is_empty() {
                config.empty_list_policy =
                    raw.parse().map_err(|_| ConfigError::InvalidValue {
                        key: EMPTY_LIST_POLICY_ENV.to_string(),
                        value: raw.clone(),
                    })?;
            }
        }
        Ok(config)
    }
}
