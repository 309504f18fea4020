//! Test utilities: mock provider presets and log capture.
//!
//! [`LogCapture`] is a `tracing-subscriber` layer that records every event
//! emitted while a closure runs, so tests can assert on diagnostics without
//! parsing formatted output.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::locator::Locator;
use crate::ports::MockProvider;

/// Parse a locator, panicking on bad test input.
pub fn loc(s: &str) -> Locator {
    Locator::parse(s).unwrap()
}

/// A mock provider that answers the diagnostic calls.
///
/// Identity and type name may be asked any number of times, and the empty
/// name resolves to `memory://<identity>/` (lowercased). Lookups of any
/// other name need their own expectations.
pub fn mock_provider(identity: &'static str) -> MockProvider {
    let mut provider = MockProvider::new();
    provider.expect_identity().return_const(identity.to_string());
    provider.expect_type_name().return_const("MockProvider");
    let root = loc(&format!("memory://{}/", identity.to_lowercase()));
    provider
        .expect_resolve()
        .withf(|name| name.is_empty())
        .returning(move |_| Some(root.clone()));
    provider
}

/// One recorded tracing event.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    /// A recorded field value, formatted as the subscriber saw it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Records events emitted inside [`LogCapture::run`].
#[derive(Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    /// Run `f` with this capture as the thread's default subscriber.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = Registry::default().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Every event recorded so far, in emission order.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events at exactly `level`.
    pub fn at(&self, level: Level) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.level == level)
            .collect()
    }

    /// Events whose message is `message`.
    pub fn with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.message == message)
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }
}

impl FieldVisitor {
    fn store(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}
