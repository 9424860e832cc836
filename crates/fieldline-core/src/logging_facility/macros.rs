//! Field-list macros
//!
//! These macros keep call sites short when an event carries several
//! caller-defined fields.

/// Build a `Vec<Field>` from `key => value` pairs, preserving their order
///
/// Keys accept anything convertible into a `FieldKey` (a `&'static str`,
/// a `String`, or a reference to a `FieldKey`); values accept anything
/// convertible into a `String`.
///
/// # Example
///
/// ```
/// use fieldline_core::fields;
/// use fieldline_core::model::LogEvent;
/// use fieldline_core_types::FieldKey;
///
/// static PORT: FieldKey = FieldKey::from_static("Port");
///
/// let event = LogEvent::new().with_fields(fields![&PORT => "8080", "Host" => "localhost"]);
/// assert_eq!(event.fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::model::Field>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::model::Field::new($key, $value)),+]
    };
}
