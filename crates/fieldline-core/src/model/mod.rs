pub mod event;
pub mod exception;
pub mod field;
pub mod operation;

pub use event::LogEvent;
pub use exception::ExceptionInfo;
pub use field::Field;
pub use operation::{Operation, OperationStatus};
