use std::error::Error;

/// The parts of an error that end up in a log line
///
/// `type_name` renders under `Exception`, `message` under `ExceptionMessage`
/// and `stack_trace` under `StackTrace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionInfo {
    type_name: String,
    message: String,
    stack_trace: Option<String>,
}

impl ExceptionInfo {
    /// Create exception details without a stack trace
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            stack_trace: None,
        }
    }

    /// Capture an error value
    ///
    /// The type name is the static type of `err`, the message is its
    /// `Display` output, and the stack trace lists the `source()` chain,
    /// one `caused by:` line per cause.
    pub fn from_error<E: Error>(err: &E) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {}", cause));
            source = cause.source();
        }

        Self {
            type_name: std::any::type_name::<E>().to_string(),
            message: err.to_string(),
            stack_trace: (!causes.is_empty()).then(|| causes.join("\n")),
        }
    }

    /// Attach a stack trace
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Get the exception type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get the exception message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the stack trace, if any
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }
}
