//! Level-gated logger entry points
//!
//! A `Logger` decides whether an event is rendered at all, renders it once
//! with `render_line`, and forwards the line to its sink.

pub mod level;
pub mod sink;
pub mod tracing_sink;

pub use level::LogLevel;
pub use sink::{LogRecord, LogSink, MemorySink, StoredRecord};
pub use tracing_sink::TracingSink;

use crate::config::LoggerConfig;
use crate::model::LogEvent;
use crate::render::render_line;

/// Logger bound to one sink
///
/// # Example
///
/// ```
/// use fieldline_core::logger::{LogLevel, Logger, MemorySink};
/// use fieldline_core::model::{LogEvent, Operation};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(sink.clone()).with_min_level(LogLevel::Info);
///
/// logger.debug(&LogEvent::new().with_operation(Operation::START_UP));
/// logger.info(&LogEvent::new().with_operation(Operation::START_UP));
///
/// assert_eq!(sink.lines(), vec!["Operation=StartUp".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Logger<S> {
    sink: S,
    min_level: LogLevel,
    source_context: Option<String>,
}

impl<S: LogSink> Logger<S> {
    /// Create a logger that passes every level to `sink`
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            min_level: LogLevel::Verbose,
            source_context: None,
        }
    }

    /// Create a logger using the level and source context from `config`
    pub fn from_config(sink: S, config: &LoggerConfig) -> Self {
        Self {
            sink,
            min_level: config.min_level,
            source_context: config.source_context.clone(),
        }
    }

    /// Drop events below `level`
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Attach a source context name to every record
    pub fn with_source_context(mut self, source_context: impl Into<String>) -> Self {
        self.source_context = Some(source_context.into());
        self
    }

    /// Use the type name of `T` as the source context
    pub fn set_source_context<T: ?Sized>(&mut self) {
        self.source_context = Some(std::any::type_name::<T>().to_string());
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn source_context(&self) -> Option<&str> {
        self.source_context.as_deref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether an event at `level` would reach the sink
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level && self.sink.is_enabled(level)
    }

    /// Render `event` and write it to the sink if `level` is enabled
    ///
    /// Disabled levels return before any rendering happens.
    pub fn log(&self, level: LogLevel, event: &LogEvent) {
        if !self.is_enabled(level) {
            return;
        }

        let line = render_line(event);
        self.sink.write(&LogRecord {
            level,
            line: &line,
            source_context: self.source_context.as_deref(),
        });
    }

    pub fn verbose(&self, event: &LogEvent) {
        self.log(LogLevel::Verbose, event)
    }

    pub fn debug(&self, event: &LogEvent) {
        self.log(LogLevel::Debug, event)
    }

    pub fn info(&self, event: &LogEvent) {
        self.log(LogLevel::Info, event)
    }

    pub fn warn(&self, event: &LogEvent) {
        self.log(LogLevel::Warn, event)
    }

    pub fn error(&self, event: &LogEvent) {
        self.log(LogLevel::Error, event)
    }

    pub fn fatal(&self, event: &LogEvent) {
        self.log(LogLevel::Fatal, event)
    }
}
