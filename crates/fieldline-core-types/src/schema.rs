//! Canonical schema constants for rendered log lines
//!
//! These constants keep the reserved key names and the line grammar
//! consistent between the builder, the sinks and the tests.

// Reserved field keys generated by the framework
pub const KEY_OPERATION: &str = "Operation";
pub const KEY_OPERATION_STATUS: &str = "OperationStatus";
pub const KEY_MESSAGE: &str = "Message";
pub const KEY_EXCEPTION: &str = "Exception";
pub const KEY_EXCEPTION_MESSAGE: &str = "ExceptionMessage";
pub const KEY_STACK_TRACE: &str = "StackTrace";
pub const KEY_SOURCE_CONTEXT: &str = "SourceContext";

// Line grammar
pub const FIELD_SEPARATOR: &str = ",";
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Message used when an exception is logged without an explicit message
pub const DEFAULT_EXCEPTION_MESSAGE: &str = "An exception has occurred";

// Structured fields attached to events forwarded to `tracing`
pub const TRACING_TARGET: &str = "fieldline";
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_SOURCE_CONTEXT: &str = "source_context";
