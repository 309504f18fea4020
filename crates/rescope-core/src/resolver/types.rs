//! Type loading across the fallback tiers.
//!
//! Unlike resource lookup this path logs nothing of its own; only the
//! provider accessors it calls emit debug records.

use super::{Resolver, TypeTier, provider_of};
use crate::error::ResolveError;
use crate::type_handle::TypeHandle;

impl Resolver {
    /// Load `qualified_name`, trying the context provider, the global type
    /// loader, the module provider and the caller's provider in that order.
    ///
    /// Only a not-found result moves on to the next tier. Any other failure
    /// is returned at once. When the caller's provider also reports
    /// not-found, that error is returned unchanged.
    pub fn load_type(
        &self,
        qualified_name: &str,
        caller: &TypeHandle,
    ) -> Result<TypeHandle, ResolveError> {
        let [fallbacks @ .., last] = TypeTier::CHAIN;
        for tier in fallbacks {
            match self.load_from(tier, qualified_name, caller) {
                Err(ResolveError::Load(err)) if err.is_not_found() => {}
                outcome => return outcome,
            }
        }
        self.load_from(last, qualified_name, caller)
    }

    fn load_from(
        &self,
        tier: TypeTier,
        qualified_name: &str,
        caller: &TypeHandle,
    ) -> Result<TypeHandle, ResolveError> {
        let handle = match tier {
            TypeTier::Context => self.current_context_provider().load_type(qualified_name)?,
            TypeTier::Global => self.types.load_type(qualified_name)?,
            TypeTier::Module => self.module_provider().load_type(qualified_name)?,
            TypeTier::Caller => provider_of(caller)?.load_type(qualified_name)?,
        };
        Ok(handle)
    }
}
