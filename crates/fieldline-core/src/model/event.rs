use crate::model::{ExceptionInfo, Field, Operation, OperationStatus};

/// Everything a caller can say about one log event
///
/// Every input is independently optional; an absent input omits its part of
/// the rendered line. Build with the `with_*` setters:
///
/// ```
/// use fieldline_core::model::{Field, LogEvent, Operation, OperationStatus};
///
/// let event = LogEvent::new()
///     .with_operation(Operation::START_UP)
///     .with_status(OperationStatus::STARTED)
///     .with_field(Field::new("Port", "8080"));
///
/// assert_eq!(event.fields.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogEvent {
    pub operation: Option<Operation>,
    pub operation_status: Option<OperationStatus>,
    pub message: Option<String>,
    pub exception: Option<ExceptionInfo>,
    pub fields: Vec<Field>,
    /// One more field, rendered after `fields`
    pub extra_field: Option<Field>,
}

impl LogEvent {
    /// Create an empty event
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn with_status(mut self, status: OperationStatus) -> Self {
        self.operation_status = Some(status);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_exception(mut self, exception: ExceptionInfo) -> Self {
        self.exception = Some(exception);
        self
    }

    /// Append one field to the ordered field list
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several fields, keeping their order
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Set the single trailing field
    pub fn with_extra_field(mut self, field: Field) -> Self {
        self.extra_field = Some(field);
        self
    }
}
