use fieldline_core_types::key;
use fieldline_core_types::schema::{DEFAULT_EXCEPTION_MESSAGE, FIELD_SEPARATOR, KEY_VALUE_SEPARATOR};
use fieldline_core_types::FieldKey;
use std::collections::HashMap;

use crate::model::field::is_blank;
use crate::model::LogEvent;

/// Render a log event into a single `Key=Value,...` line
///
/// The line is laid out as:
/// - `Operation` then `OperationStatus` (upper-cased), each only if present
/// - `Message` (explicit, or the default text when only an exception is given)
/// - the event's fields in order, then its extra field
/// - `Exception`, `ExceptionMessage`, `StackTrace` when an exception is given
///
/// Body fields sharing a key name collapse to one entry holding the last
/// value, at the position where the key first appeared. Body fields with a
/// blank value are dropped afterwards. An event with nothing to render
/// yields an empty string.
///
/// # Arguments
/// * `event` - The event to render
///
/// # Returns
/// The rendered line; never fails
pub fn render_line(event: &LogEvent) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(operation) = &event.operation {
        parts.push(format_pair(&key::OPERATION, operation.name()));
    }

    if let Some(status) = &event.operation_status {
        parts.push(format_pair(&key::OPERATION_STATUS, &status.rendered_name()));
    }

    for (key, value) in collapse_keep_last(body_entries(event)) {
        if !is_blank(value) {
            parts.push(format_pair(key, value));
        }
    }

    parts.join(FIELD_SEPARATOR)
}

type Entry<'a> = (&'a FieldKey, &'a str);

/// Body fields in render order, duplicates included
fn body_entries(event: &LogEvent) -> Vec<Entry<'_>> {
    let mut entries: Vec<Entry<'_>> = Vec::with_capacity(event.fields.len() + 5);

    match event.message.as_deref() {
        Some(message) if !is_blank(message) => {
            entries.push((&key::MESSAGE, message));
        }
        _ if event.exception.is_some() => {
            entries.push((&key::MESSAGE, DEFAULT_EXCEPTION_MESSAGE));
        }
        _ => {}
    }

    entries.extend(
        event
            .fields
            .iter()
            .chain(event.extra_field.iter())
            .map(|field| (field.key(), field.value())),
    );

    if let Some(exception) = &event.exception {
        entries.push((&key::EXCEPTION, exception.type_name()));
        entries.push((&key::EXCEPTION_MESSAGE, exception.message()));
        entries.push((&key::STACK_TRACE, exception.stack_trace().unwrap_or_default()));
    }

    entries
}

/// Collapse entries by key name: first position, last value
fn collapse_keep_last<'a>(entries: Vec<Entry<'a>>) -> Vec<Entry<'a>> {
    let mut positions: HashMap<&'a str, usize> = HashMap::with_capacity(entries.len());
    let mut collapsed: Vec<Entry<'a>> = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        match positions.get(key.name()) {
            Some(&index) => collapsed[index].1 = value,
            None => {
                positions.insert(key.name(), collapsed.len());
                collapsed.push((key, value));
            }
        }
    }

    collapsed
}

fn format_pair(key: &FieldKey, value: &str) -> String {
    format!("{}{}{}", key.name(), KEY_VALUE_SEPARATOR, value)
}
