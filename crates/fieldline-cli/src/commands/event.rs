//! Event flags shared by `render` and `emit`

use clap::Args;
use fieldline_core::model::{ExceptionInfo, Field, LogEvent, Operation, OperationStatus};
use fieldline_core::Result;

#[derive(Debug, Args)]
pub struct EventArgs {
    /// Operation name (e.g. StartUp)
    #[arg(short, long)]
    pub operation: Option<String>,

    /// Operation status name (rendered upper-cased)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Free-text message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Field as Key=Value (repeatable, order kept)
    #[arg(short, long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// One more field as Key=Value, rendered after --field
    #[arg(long, value_name = "KEY=VALUE")]
    pub extra: Option<String>,

    /// Exception type name; enables the exception fields
    #[arg(long)]
    pub exception_type: Option<String>,

    /// Exception message
    #[arg(long, requires = "exception_type")]
    pub exception_message: Option<String>,

    /// Exception stack trace
    #[arg(long, requires = "exception_type")]
    pub stack_trace: Option<String>,
}

impl EventArgs {
    /// Build the event described by the flags
    pub fn to_event(&self) -> Result<LogEvent> {
        let fields = self
            .fields
            .iter()
            .map(|f| f.parse::<Field>())
            .collect::<Result<Vec<_>>>()?;

        let mut event = LogEvent::new().with_fields(fields);
        event.operation = self.operation.clone().map(Operation::new);
        event.operation_status = self.status.clone().map(OperationStatus::new);
        event.message = self.message.clone();
        event.extra_field = self.extra.as_deref().map(str::parse::<Field>).transpose()?;
        event.exception = self.exception_type.as_ref().map(|type_name| {
            let exception = ExceptionInfo::new(
                type_name.clone(),
                self.exception_message.clone().unwrap_or_default(),
            );
            match &self.stack_trace {
                Some(trace) => exception.with_stack_trace(trace.clone()),
                None => exception,
            }
        });

        Ok(event)
    }
}
