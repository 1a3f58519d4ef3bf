//! Integration tests for the tracing adapters.
//!
//! These tests verify that:
//! - debug logging emits one event per visited path and per masking decision
//! - nothing is emitted under the `pathmask` target when debug logging is off
//! - `MaskedJson` can be recorded as a display field

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

use pathmask::{Masker, RuleSet, TracingMaskedExt};
use serde_json::json;
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry,
};

#[derive(Debug, Clone)]
struct CapturedEvent {
    target: String,
    level: Level,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }
}

#[derive(Default)]
struct FieldCollector(HashMap<String, String>);

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

// A layer that keeps every event it sees
#[derive(Clone, Default)]
struct CapturingLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> tracing_subscriber::Layer<S> for CapturingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_owned(),
            level: *event.metadata().level(),
            fields: collector.0,
        });
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
    let layer = CapturingLayer::default();
    let events = Arc::clone(&layer.events);
    let result = tracing::subscriber::with_default(registry().with(layer), f);
    let events = events.lock().unwrap().clone();
    (result, events)
}

mod debug_logging {
    use super::*;

    #[test]
    fn emits_visits_and_masking_decisions() {
        let masker = Masker::builder().debug_logging(true).build();

        let (masked, events) = capture(|| {
            masker
                .mask(r#"{"jobs":[{"name":"A","id":1}]}"#, ["$.jobs[].name"])
                .unwrap()
        });
        assert_eq!(masked, r#"{"jobs":[{"name":"[REDACTED]","id":1}]}"#);

        let events: Vec<_> = events.iter().filter(|e| e.target == "pathmask").collect();
        let visits: Vec<_> = events
            .iter()
            .filter(|e| e.field("message") == "visiting node")
            .collect();
        let masking: Vec<_> = events
            .iter()
            .filter(|e| e.field("message") == "masking node")
            .collect();

        assert_eq!(events.len(), visits.len() + masking.len());
        assert_eq!(
            visits.iter().map(|e| e.field("path")).collect::<Vec<_>>(),
            ["$", "$.jobs", "$.jobs[0]", "$.jobs[0].name", "$.jobs[0].id"]
        );
        assert!(visits.iter().all(|e| e.level == Level::TRACE));
        assert_eq!(visits[2].field("canonical"), "$.jobs[]");

        assert_eq!(masking.len(), 1);
        assert_eq!(masking[0].level, Level::DEBUG);
        assert_eq!(masking[0].field("path"), "$.jobs[0].name");
        assert_eq!(masking[0].field("canonical"), "$.jobs[].name");
    }

    #[test]
    fn is_silent_when_disabled() {
        let masker = Masker::new();

        let (masked, events) = capture(|| masker.mask(r#"{"a":[1,2]}"#, ["$.a[]"]).unwrap());

        assert_eq!(masked, r#"{"a":["[REDACTED]","[REDACTED]"]}"#);
        assert!(events.iter().all(|e| e.target != "pathmask"));
    }
}

mod masked_fields {
    use super::*;

    #[test]
    fn records_masked_json_as_a_display_field() {
        let rules = RuleSet::new(["$.password"]);
        let masked = Masker::new().mask_json(json!({"user": "ana", "password": "x"}), &rules);

        let ((), events) = capture(|| {
            tracing::info!(target: "app", event = %masked.tracing_masked(), "request received");
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("event"), r#"{"user":"ana","password":"[REDACTED]"}"#);
        assert_eq!(events[0].field("message"), "request received");
    }
}
