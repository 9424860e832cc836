//! Logging facility for fieldline
//!
//! This module wires the logger into the process-wide `tracing` setup:
//! - Single initialization point via `init(profile)`
//! - `fields!` macro for building field lists
//! - Test capture mode for deterministic assertions on emitted lines
//!
//! # Usage
//!
//! ```rust
//! use fieldline_core::logger::{Logger, TracingSink};
//! use fieldline_core::logging_facility::{init, Profile};
//! use fieldline_core::model::{LogEvent, Operation};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//!
//! let logger = Logger::new(TracingSink::new());
//! logger.info(&LogEvent::new().with_operation(Operation::START_UP));
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
