use fieldline_core::logger::{Logger, MemorySink};
use fieldline_core::model::ExceptionInfo;
use fieldline_core_types::FieldKey;

pub static TEST_KEY: FieldKey = FieldKey::from_static("TestKey");
pub static TEST_KEY2: FieldKey = FieldKey::from_static("TestKey2");

/// Create a logger that accepts every level, plus a handle on its records
#[allow(dead_code)]
pub fn recording_logger() -> (Logger<MemorySink>, MemorySink) {
    let sink = MemorySink::new();
    (Logger::new(sink.clone()), sink)
}

/// An exception with a type name and an empty message
#[allow(dead_code)]
pub fn bare_exception() -> ExceptionInfo {
    ExceptionInfo::new("Exception", "")
}
