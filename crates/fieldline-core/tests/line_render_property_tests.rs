//! Property tests for line rendering invariants
//!
//! Keys are drawn from a small alphabet so duplicates are frequent, and
//! values from a mix of blank and non-blank text without separators so a
//! rendered line can be split back into its fields.

use fieldline_core::model::{Field, LogEvent, Operation, OperationStatus};
use fieldline_core::render_line;
use proptest::prelude::*;
use std::collections::HashMap;

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["A", "B", "C", "D", "Message"]).prop_map(str::to_string)
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[a-z0-9 ]{1,6}",
    ]
}

fn fields_strategy() -> impl Strategy<Value = Vec<Field>> {
    prop::collection::vec(
        (key_strategy(), value_strategy()).prop_map(|(k, v)| Field::new(k, v)),
        0..12,
    )
}

fn split_line(line: &str) -> Vec<(String, String)> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(',')
        .map(|part| {
            let (key, value) = part.split_once('=').expect("every part is Key=Value");
            (key.to_string(), value.to_string())
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_keys_are_unique(fields in fields_strategy()) {
        let line = render_line(&LogEvent::new().with_fields(fields));
        let parts = split_line(&line);

        let mut seen = std::collections::HashSet::new();
        for (key, _) in &parts {
            prop_assert!(seen.insert(key.clone()), "duplicate key {} in {}", key, line);
        }
    }

    #[test]
    fn prop_no_blank_values(fields in fields_strategy()) {
        let line = render_line(&LogEvent::new().with_fields(fields));

        for (_, value) in split_line(&line) {
            prop_assert!(!value.trim().is_empty());
        }
    }

    #[test]
    fn prop_last_value_wins_at_first_position(fields in fields_strategy()) {
        let line = render_line(&LogEvent::new().with_fields(fields.clone()));

        let mut last_values: HashMap<&str, &str> = HashMap::new();
        let mut first_order: Vec<&str> = Vec::new();
        for field in &fields {
            let name = field.key().name();
            if last_values.insert(name, field.value()).is_none() {
                first_order.push(name);
            }
        }

        let expected: Vec<(String, String)> = first_order
            .into_iter()
            .map(|name| (name.to_string(), last_values[name].to_string()))
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();

        prop_assert_eq!(split_line(&line), expected);
    }

    #[test]
    fn prop_render_is_deterministic(
        fields in fields_strategy(),
        message in proptest::option::of(value_strategy()),
    ) {
        let mut event = LogEvent::new().with_fields(fields);
        event.message = message;

        prop_assert_eq!(render_line(&event), render_line(&event.clone()));
    }

    #[test]
    fn prop_status_is_upper_cased(name in "[a-zA-Z]{1,12}") {
        let event = LogEvent::new()
            .with_operation(Operation::START_UP)
            .with_status(OperationStatus::new(name.clone()));

        prop_assert_eq!(
            render_line(&event),
            format!("Operation=StartUp,OperationStatus={}", name.to_uppercase())
        );
    }

    #[test]
    fn prop_operation_leads_the_line(fields in fields_strategy()) {
        let line = render_line(
            &LogEvent::new()
                .with_operation(Operation::new("Sync"))
                .with_fields(fields),
        );

        prop_assert!(line.starts_with("Operation=Sync"));
    }
}
