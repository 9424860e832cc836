use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Named classifier of what a logged event represents
///
/// The line builder treats the name as opaque text. A few well-known
/// operations are provided; callers may create any other name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operation(Cow<'static, str>);

impl Operation {
    pub const UNKNOWN: Operation = Operation::from_static("Unknown");
    pub const START_UP: Operation = Operation::from_static("StartUp");
    pub const SHUT_DOWN: Operation = Operation::from_static("ShutDown");

    /// Create an operation with the given name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Create an operation from a static name
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Get the operation name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named phase of an operation (started, succeeded, ...)
///
/// Rendered upper-cased in the log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationStatus(Cow<'static, str>);

impl OperationStatus {
    pub const UNKNOWN: OperationStatus = OperationStatus::from_static("Unknown");
    pub const STARTED: OperationStatus = OperationStatus::from_static("Started");
    pub const SUCCESS: OperationStatus = OperationStatus::from_static("Success");
    pub const FAILURE: OperationStatus = OperationStatus::from_static("Failure");
    pub const IN_PROGRESS: OperationStatus = OperationStatus::from_static("InProgress");

    /// Create a status with the given name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Create a status from a static name
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Get the status name as supplied
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Get the name as it appears in a rendered line
    pub fn rendered_name(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
