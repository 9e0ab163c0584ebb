use tracing::Span;

/// Hands out loggers bound to a component name.
///
/// Components call this once at construction and keep the returned
/// [`Logger`] as a field. Every record the logger emits carries the bound
/// name in its `logger` field, so the sink can tell components apart even
/// though the records share one target.
///
/// Each logger also owns a `logger{component=<name>}` span that its records
/// are emitted in, so a single component can be given its own threshold:
/// `RUST_LOG="info,[logger{component=LoggerFactoryService}]=trace"`.
pub struct LoggerFactory;

impl LoggerFactory {
    pub fn get_logger(name: &'static str) -> Logger {
        // ERROR so the span stays enabled under any threshold that lets a record through
        let span = tracing::error_span!("logger", component = name);
        Logger { name, span }
    }
}

/// Named logger handle backed by the `tracing` dispatcher
#[derive(Debug, Clone)]
pub struct Logger {
    name: &'static str,
    span: Span,
}

impl Logger {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn trace(&self, message: &str) {
        self.span
            .in_scope(|| tracing::trace!(logger = self.name, "{message}"));
    }

    pub fn debug(&self, message: &str) {
        self.span
            .in_scope(|| tracing::debug!(logger = self.name, "{message}"));
    }

    pub fn info(&self, message: &str) {
        self.span
            .in_scope(|| tracing::info!(logger = self.name, "{message}"));
    }

    pub fn warn(&self, message: &str) {
        self.span
            .in_scope(|| tracing::warn!(logger = self.name, "{message}"));
    }

    pub fn error(&self, message: &str) {
        self.span
            .in_scope(|| tracing::error!(logger = self.name, "{message}"));
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Logger {}
