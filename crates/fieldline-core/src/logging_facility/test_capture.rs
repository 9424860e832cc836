//! Test capture mode for deterministic logging assertions
//!
//! This module provides a test-only subscriber that captures the events
//! `TracingSink` emits, so tests can assert on the exact rendered lines.

use fieldline_core_types::schema::{FIELD_SEVERITY, FIELD_SOURCE_CONTEXT, TRACING_TARGET};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// A captured `fieldline` event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub severity: Option<String>,
    pub source_context: Option<String>,
    /// The rendered log line (the event message)
    pub line: Option<String>,
    pub fields: HashMap<String, String>,
}

struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Test capture layer collecting events under the `fieldline` target
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        let capture = TestCapture { events };
        (layer, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() != TRACING_TARGET {
            return;
        }

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *metadata.level(),
            severity: visitor.fields.get(FIELD_SEVERITY).cloned(),
            source_context: visitor.fields.get(FIELD_SOURCE_CONTEXT).cloned(),
            line: visitor.fields.get("message").cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Get the rendered lines of all captured events, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.events().into_iter().filter_map(|e| e.line).collect()
    }

    /// Assert that a line was emitted exactly as given
    ///
    /// # Panics
    ///
    /// Panics if no captured event carries `line`
    pub fn assert_line_logged(&self, line: &str) {
        let lines = self.lines();
        assert!(
            lines.iter().any(|l| l == line),
            "Expected line '{}' not found in {} captured events",
            line,
            lines.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// This should be called at the start of each test that needs to capture logs.
/// Returns a shared global capture instance; tests running in parallel see
/// each other's events, so assert on lines unique to the test.
///
/// # Example
///
/// ```
/// use fieldline_core::logger::{Logger, TracingSink};
/// use fieldline_core::logging_facility::test_capture::init_test_capture;
/// use fieldline_core::model::{LogEvent, Operation};
///
/// let capture = init_test_capture();
/// Logger::new(TracingSink::new()).info(&LogEvent::new().with_operation(Operation::new("Doc")));
/// capture.assert_line_logged("Operation=Doc");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).try_init().ok();
            capture
        })
        .clone()
}
