//! In-memory log sink for tests.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// Order in which every component emits its records
pub const LEVEL_SEQUENCE: [Level; 5] = [
    Level::TRACE,
    Level::DEBUG,
    Level::INFO,
    Level::WARN,
    Level::ERROR,
];

const CRATE_TARGET: &str = "log_practice";

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub logger: Option<String>,
    pub span: Option<String>,
    pub message: String,
}

impl CapturedRecord {
    /// Name of the emitting component: the bound logger name when present,
    /// otherwise the innermost enclosing span.
    pub fn component(&self) -> Option<&str> {
        self.logger.as_deref().or(self.span.as_deref())
    }
}

#[derive(Clone, Default)]
pub struct CaptureLayer {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl CaptureLayer {
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Records emitted from this crate, ignoring middleware noise
    pub fn app_records(&self) -> Vec<CapturedRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.target.starts_with(CRATE_TARGET))
            .collect()
    }

    pub fn records_for(&self, component: &str) -> Vec<CapturedRecord> {
        self.app_records()
            .into_iter()
            .filter(|r| r.component() == Some(component))
            .collect()
    }
}

#[derive(Default)]
struct RecordVisitor {
    message: String,
    logger: Option<String>,
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "logger" => self.logger = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "logger" => self.logger = Some(format!("{value:?}")),
            _ => {}
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let record = CapturedRecord {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            logger: visitor.logger,
            span: ctx.event_span(event).map(|span| span.name().to_string()),
            message: visitor.message,
        };

        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record);
    }
}

/// Installs a capturing subscriber for the current thread.
///
/// Only effective on single-threaded runtimes; `#[tokio::test]` defaults
/// to one.
pub fn capture() -> (CaptureLayer, DefaultGuard) {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (layer, guard)
}

/// Like [`capture`], but only records that pass `filter` reach the layer.
pub fn capture_filtered(filter: EnvFilter) -> (CaptureLayer, DefaultGuard) {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(layer.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (layer, guard)
}
