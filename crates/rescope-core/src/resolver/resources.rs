//! Resource lookup across the fallback tiers.

use tracing::{debug, warn};

use super::{Resolver, Tier};
use crate::config::EmptyListPolicy;
use crate::diagnostics::describe;
use crate::error::ResolveError;
use crate::locator::Locator;
use crate::ports::Provider;
use crate::type_handle::TypeHandle;

/// Look `name` up in exactly one provider, without fallback or logging.
pub fn resolve_in(provider: &dyn Provider, name: &str) -> Option<Locator> {
    provider.resolve(name)
}

/// The root locator of `provider`'s search path.
///
/// Equivalent to `resolve_in(provider, "")`. Never logs, because
/// [`describe`] calls it.
pub fn classpath_root_of(provider: &dyn Provider) -> Option<Locator> {
    resolve_in(provider, "")
}

impl Resolver {
    /// Look `name` up in the module provider only. Nothing is logged.
    pub fn resolve_resource(&self, name: &str) -> Option<Locator> {
        resolve_in(&*self.module, name)
    }

    /// The root locator of the module provider.
    pub fn classpath_root(&self) -> Option<Locator> {
        self.resolve_resource("")
    }

    /// Look `name` up in the context, module and caller providers, in order.
    ///
    /// The first provider holding `name` wins and later tiers are never
    /// consulted. Each miss is logged at warn level with the provider's
    /// diagnostic record, and a final warning is logged when every tier
    /// misses. A caller without a defining provider counts as a miss.
    ///
    /// Absence is a normal outcome; this never fails.
    pub fn resolve_resource_from(&self, name: &str, caller: &TypeHandle) -> Option<Locator> {
        for tier in Tier::CHAIN {
            let provider = match self.tier_provider(tier, caller) {
                Ok(provider) => provider,
                Err(err) => {
                    warn!(resource = name, %tier, error = %err, "Provider tier unavailable");
                    continue;
                }
            };

            if let Some(locator) = resolve_in(&*provider, name) {
                debug!(
                    resource = name,
                    %tier,
                    provider = %describe(&*provider),
                    %locator,
                    "Resource found"
                );
                return Some(locator);
            }

            warn!(
                resource = name,
                %tier,
                provider = %describe(&*provider),
                "Resource not found in provider"
            );
        }

        warn!(resource = name, "Resource not found in any provider");
        None
    }

    /// Look up every resource named `name`, tier by tier.
    ///
    /// The first tier with a result wins. With
    /// [`EmptyListPolicy::FallThrough`] an empty list is a miss; with
    /// [`EmptyListPolicy::Accept`] the first reachable tier's list is
    /// returned as-is. Each empty tier that falls through is logged at warn
    /// level. An I/O fault in any provider is returned immediately and the
    /// remaining tiers are not tried.
    pub fn resolve_resources_from(
        &self,
        name: &str,
        caller: &TypeHandle,
    ) -> Result<Vec<Locator>, ResolveError> {
        for tier in Tier::CHAIN {
            let provider = match self.tier_provider(tier, caller) {
                Ok(provider) => provider,
                Err(err) => {
                    warn!(resource = name, %tier, error = %err, "Provider tier unavailable");
                    continue;
                }
            };

            let locators = provider
                .resolve_all(name)
                .map_err(|source| ResolveError::io(name, source))?;

            if !locators.is_empty() || self.config.empty_list_policy == EmptyListPolicy::Accept {
                debug!(
                    resource = name,
                    %tier,
                    provider = %describe(&*provider),
                    count = locators.len(),
                    "Resources found"
                );
                return Ok(locators);
            }

            warn!(
                resource = name,
                %tier,
                provider = %describe(&*provider),
                "No resources in provider"
            );
        }

        warn!(resource = name, "Resources not found in any provider");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use tracing::Level;

    use super::*;
    use crate::config::ResolverConfig;
    use crate::ports::{FixedContext, MockProvider, ProviderRef};
    use crate::test_utils::{LogCapture, loc, mock_provider};

    const NAME: &str = "config.json";

    fn resolver(context: MockProvider, module: MockProvider) -> Resolver {
        let context: ProviderRef = Arc::new(context);
        Resolver::new(Arc::new(module)).with_context(FixedContext::new(context))
    }

    fn caller(provider: MockProvider) -> TypeHandle {
        TypeHandle::new("app::Caller", Arc::new(provider))
    }

    fn holding(identity: &'static str, locator: Option<Locator>, calls: usize) -> MockProvider {
        let mut provider = mock_provider(identity);
        provider
            .expect_resolve()
            .withf(|name| name == NAME)
            .times(calls)
            .returning(move |_| locator.clone());
        provider
    }

    #[test]
    fn earliest_tier_wins() {
        let l = loc("memory://p2/config.json");
        let l2 = loc("memory://p3/config.json");
        let p1 = holding("P1", None, 1);
        let p2 = holding("P2", Some(l.clone()), 1);
        let p3 = holding("P3", Some(l2), 0);

        let capture = LogCapture::default();
        let found = capture.run(|| resolver(p1, p2).resolve_resource_from(NAME, &caller(p3)));

        assert_eq!(found, Some(l));
        let successes = capture.with_message("Resource found");
        assert_eq!(successes.len(), 1);
        assert!(successes[0].field("provider").unwrap().contains("\"P2\""));
        assert_eq!(successes[0].field("tier"), Some("module"));
        assert_eq!(capture.at(Level::WARN).len(), 1);
    }

    #[test]
    fn context_hit_skips_everything_else() {
        let l = loc("memory://p1/config.json");
        let p1 = holding("P1", Some(l.clone()), 1);
        let p2 = holding("P2", Some(loc("memory://p2/config.json")), 0);
        let p3 = holding("P3", Some(loc("memory://p3/config.json")), 0);

        let found = resolver(p1, p2).resolve_resource_from(NAME, &caller(p3));
        assert_eq!(found, Some(l));
    }

    #[test]
    fn caller_tier_is_last_resort() {
        let l3 = loc("memory://p3/config.json");
        let p1 = holding("P1", None, 1);
        let p2 = holding("P2", None, 1);
        let p3 = holding("P3", Some(l3.clone()), 1);

        let found = resolver(p1, p2).resolve_resource_from(NAME, &caller(p3));
        assert_eq!(found, Some(l3));
    }

    #[test]
    fn miss_everywhere_warns_per_tier_then_summarizes() {
        let p1 = holding("P1", None, 1);
        let p2 = holding("P2", None, 1);
        let p3 = holding("P3", None, 1);

        let capture = LogCapture::default();
        let found = capture.run(|| resolver(p1, p2).resolve_resource_from(NAME, &caller(p3)));

        assert!(found.is_none());
        let warnings = capture.at(Level::WARN);
        assert_eq!(warnings.len(), 4);
        let tiers: Vec<_> = warnings[..3].iter().map(|e| e.field("tier")).collect();
        assert_eq!(tiers, [Some("context"), Some("module"), Some("caller")]);
        for (warning, id) in warnings[..3].iter().zip(["\"P1\"", "\"P2\"", "\"P3\""]) {
            assert_eq!(warning.message, "Resource not found in provider");
            assert!(warning.field("provider").unwrap().contains(id));
            assert_eq!(warning.field("resource"), Some(NAME));
        }
        assert_eq!(warnings[3].message, "Resource not found in any provider");
        assert!(capture.with_message("Resource found").is_empty());
    }

    #[test]
    fn builtin_caller_counts_as_a_miss() {
        let p1 = holding("P1", None, 1);
        let p2 = holding("P2", None, 1);

        let capture = LogCapture::default();
        let found = capture.run(|| {
            resolver(p1, p2).resolve_resource_from(NAME, &TypeHandle::builtin("core::Text"))
        });

        assert!(found.is_none());
        assert_eq!(capture.with_message("Provider tier unavailable").len(), 1);
    }

    #[test]
    fn single_scope_lookup_uses_module_only() {
        let l = loc("memory://p2/config.json");
        let p1 = holding("P1", Some(loc("memory://p1/config.json")), 0);
        let p2 = holding("P2", Some(l.clone()), 1);
        assert_eq!(resolver(p1, p2).resolve_resource(NAME), Some(l));
    }

    #[test]
    fn single_scope_lookup_never_describes_the_module() {
        let l = loc("memory://p2/config.json");
        let mut p2 = MockProvider::new();
        p2.expect_resolve()
            .withf(|name| name == NAME)
            .times(1)
            .return_const(Some(l.clone()));
        let resolver = Resolver::new(Arc::new(p2));

        let capture = LogCapture::default();
        let found = capture.run(|| resolver.resolve_resource(NAME));

        assert_eq!(found, Some(l));
        assert!(capture.with_message("Module provider").is_empty());
    }

    #[test]
    fn classpath_root_is_empty_name_lookup() {
        let p1 = mock_provider("P1");
        let p2 = mock_provider("P2");
        let resolver = resolver(p1, p2);
        assert_eq!(resolver.classpath_root(), resolver.resolve_resource(""));
        assert_eq!(resolver.classpath_root(), Some(loc("memory://p2/")));
    }

    fn listing(
        identity: &'static str,
        locators: Vec<Locator>,
        calls: usize,
    ) -> MockProvider {
        let mut provider = mock_provider(identity);
        provider
            .expect_resolve_all()
            .withf(|name| name == NAME)
            .times(calls)
            .returning(move |_| Ok(locators.clone()));
        provider
    }

    #[test]
    fn empty_lists_fall_through_by_default() {
        let found = vec![loc("memory://p2/a"), loc("memory://p2/b")];
        let p1 = listing("P1", Vec::new(), 1);
        let p2 = listing("P2", found.clone(), 1);
        let p3 = listing("P3", vec![loc("memory://p3/a")], 0);

        let result = resolver(p1, p2).resolve_resources_from(NAME, &caller(p3)).unwrap();
        assert_eq!(result, found);
    }

    #[test]
    fn empty_lists_warn_per_tier_in_order() {
        let p1 = listing("P1", Vec::new(), 1);
        let p2 = listing("P2", Vec::new(), 1);
        let p3 = listing("P3", Vec::new(), 1);

        let capture = LogCapture::default();
        let result = capture
            .run(|| resolver(p1, p2).resolve_resources_from(NAME, &caller(p3)))
            .unwrap();

        assert!(result.is_empty());
        let warnings = capture.at(Level::WARN);
        assert_eq!(warnings.len(), 4);
        let tiers: Vec<_> = warnings[..3].iter().map(|e| e.field("tier")).collect();
        assert_eq!(tiers, [Some("context"), Some("module"), Some("caller")]);
        for (warning, id) in warnings[..3].iter().zip(["\"P1\"", "\"P2\"", "\"P3\""]) {
            assert_eq!(warning.message, "No resources in provider");
            assert!(warning.field("provider").unwrap().contains(id));
            assert_eq!(warning.field("resource"), Some(NAME));
        }
        assert_eq!(warnings[3].message, "Resources not found in any provider");
    }

    #[test]
    fn accept_policy_returns_first_list_even_when_empty() {
        let p1 = listing("P1", Vec::new(), 1);
        let p2 = listing("P2", vec![loc("memory://p2/a")], 0);
        let p3 = listing("P3", vec![loc("memory://p3/a")], 0);

        let config = ResolverConfig {
            empty_list_policy: EmptyListPolicy::Accept,
        };
        let result = resolver(p1, p2)
            .with_config(config)
            .resolve_resources_from(NAME, &caller(p3))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn empty_everywhere_is_empty_not_an_error() {
        let p1 = listing("P1", Vec::new(), 1);
        let p2 = listing("P2", Vec::new(), 1);
        let p3 = listing("P3", Vec::new(), 1);

        let capture = LogCapture::default();
        let result = capture
            .run(|| resolver(p1, p2).resolve_resources_from(NAME, &caller(p3)))
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(
            capture.with_message("Resources not found in any provider").len(),
            1
        );
    }

    #[test]
    fn io_fault_propagates_without_trying_later_tiers() {
        let mut p1 = mock_provider("P1");
        p1.expect_resolve_all()
            .withf(|name| name == NAME)
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));
        let p2 = listing("P2", vec![loc("memory://p2/a")], 0);
        let p3 = listing("P3", vec![loc("memory://p3/a")], 0);

        let err = resolver(p1, p2)
            .resolve_resources_from(NAME, &caller(p3))
            .unwrap_err();
        match err {
            ResolveError::Io { resource, source } => {
                assert_eq!(resource, NAME);
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}
