use fieldline_core_types::schema::TRACING_TARGET;
use tracing::Level;

use crate::logger::{LogLevel, LogRecord, LogSink};

/// Sink forwarding rendered lines to the `tracing` dispatcher
///
/// Events are emitted under the `fieldline` target with the line as the
/// event message plus `severity` and `source_context` fields. `Fatal` has no
/// `tracing` counterpart and is emitted at ERROR with `severity = "FATAL"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn is_enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Verbose => tracing::enabled!(target: TRACING_TARGET, Level::TRACE),
            LogLevel::Debug => tracing::enabled!(target: TRACING_TARGET, Level::DEBUG),
            LogLevel::Info => tracing::enabled!(target: TRACING_TARGET, Level::INFO),
            LogLevel::Warn => tracing::enabled!(target: TRACING_TARGET, Level::WARN),
            LogLevel::Error | LogLevel::Fatal => {
                tracing::enabled!(target: TRACING_TARGET, Level::ERROR)
            }
        }
    }

    fn write(&self, record: &LogRecord<'_>) {
        let severity = record.level.as_str();
        let source_context = record.source_context;

        match record.level {
            LogLevel::Verbose => {
                tracing::trace!(target: TRACING_TARGET, severity, source_context, "{}", record.line)
            }
            LogLevel::Debug => {
                tracing::debug!(target: TRACING_TARGET, severity, source_context, "{}", record.line)
            }
            LogLevel::Info => {
                tracing::info!(target: TRACING_TARGET, severity, source_context, "{}", record.line)
            }
            LogLevel::Warn => {
                tracing::warn!(target: TRACING_TARGET, severity, source_context, "{}", record.line)
            }
            LogLevel::Error | LogLevel::Fatal => {
                tracing::error!(target: TRACING_TARGET, severity, source_context, "{}", record.line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_without_subscriber_does_not_panic() {
        TracingSink::new().write(&LogRecord {
            level: LogLevel::Fatal,
            line: "Operation=ShutDown",
            source_context: None,
        });
    }
}
