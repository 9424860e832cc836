//! Sinks that receive rendered lines
//!
//! A sink never sees a `LogEvent`: the logger renders the line first and
//! hands over only the finished record.

use std::sync::{Arc, Mutex};

use crate::logger::LogLevel;

/// One rendered line on its way to a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub line: &'a str,
    pub source_context: Option<&'a str>,
}

/// Backend adapter receiving rendered lines
///
/// Implementations must be safe to share between threads; the logger calls
/// `write` at most once per event.
pub trait LogSink: Send + Sync {
    /// Whether records at `level` would be kept
    ///
    /// Lets the logger skip rendering for levels the backend discards.
    fn is_enabled(&self, _level: LogLevel) -> bool {
        true
    }

    /// Forward one record to the backend
    fn write(&self, record: &LogRecord<'_>);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn is_enabled(&self, level: LogLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn write(&self, record: &LogRecord<'_>) {
        (**self).write(record)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn is_enabled(&self, level: LogLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn write(&self, record: &LogRecord<'_>) {
        (**self).write(record)
    }
}

/// An owned copy of a record kept by `MemorySink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub level: LogLevel,
    pub line: String,
    pub source_context: Option<String>,
}

/// Sink that keeps every record in memory
///
/// Clones share the same buffer, so a clone can be handed to a logger while
/// the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<StoredRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all stored records, oldest first
    pub fn records(&self) -> Vec<StoredRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Get the most recent record, if any
    pub fn last(&self) -> Option<StoredRecord> {
        self.records
            .lock()
            .ok()
            .and_then(|records| records.last().cloned())
    }

    /// Get all stored lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.line).collect()
    }

    /// Drop all stored records
    pub fn clear(&self) {
        self.records.lock().map(|mut r| r.clear()).ok();
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &LogRecord<'_>) {
        let stored = StoredRecord {
            level: record.level,
            line: record.line.to_string(),
            source_context: record.source_context.map(str::to_string),
        };

        self.records
            .lock()
            .map(|mut records| records.push(stored))
            .ok();
    }
}
