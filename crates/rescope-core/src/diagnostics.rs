//! Log-only snapshots of providers.
//!
//! A [`DiagnosticRecord`] never takes part in a resolution decision. It only
//! tells an operator which scope was searched and where that scope is rooted.

use std::fmt;

use serde::Serialize;

use crate::locator::Locator;
use crate::ports::Provider;
use crate::resolver::classpath_root_of;

/// Descriptive record of one provider.
///
/// Serializes with its keys in this fixed order: `provider`,
/// `provider_type`, `root_locator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    /// The provider's identity string.
    pub provider: String,
    /// The provider's concrete implementation type.
    pub provider_type: String,
    /// What the provider resolves the empty name to.
    pub root_locator: Option<Locator>,
}

/// Snapshot `provider` for logging.
///
/// This resolves the empty name on `provider`, so it must never be called
/// from code that runs while resolving the empty name itself.
/// [`classpath_root_of`] does not log, which keeps the two apart.
pub fn describe(provider: &dyn Provider) -> DiagnosticRecord {
    DiagnosticRecord {
        provider: provider.identity(),
        provider_type: provider.type_name().to_string(),
        root_locator: classpath_root_of(provider),
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
