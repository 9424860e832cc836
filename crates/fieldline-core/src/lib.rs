//! fieldline core - structured log-line construction
//!
//! This crate turns a loosely-typed log event into one deterministic
//! `Key=Value,...` line and hands it to a sink:
//! - Field model: `Field`, `Operation`, `OperationStatus`, `ExceptionInfo`
//! - `LogEvent`, the single options struct describing an event
//! - `render_line`, the pure line builder (ordering, de-duplication, filtering)
//! - `Logger` with level-gated entry points and pluggable `LogSink`s
//! - Logging facility wiring the `TracingSink` into `tracing-subscriber`

pub mod config;
pub mod errors;
pub mod logger;
pub mod logging_facility;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use errors::{ErrorKind, FieldlineError, Result};
pub use fieldline_core_types::FieldKey;
pub use logger::{LogLevel, LogSink, Logger, MemorySink, TracingSink};
pub use model::{ExceptionInfo, Field, LogEvent, Operation, OperationStatus};
pub use render::render_line;
