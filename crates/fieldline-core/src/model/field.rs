use fieldline_core_types::schema::KEY_VALUE_SEPARATOR;
use fieldline_core_types::FieldKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::FieldlineError;

/// A single key/value pair destined for a log line
///
/// Fields are created per log call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    key: FieldKey,
    value: String,
}

impl Field {
    /// Create a new field
    pub fn new(key: impl Into<FieldKey>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a field whose value is the `Display` rendering of `value`
    pub fn display(key: impl Into<FieldKey>, value: &impl fmt::Display) -> Self {
        Self::new(key, value.to_string())
    }

    /// Get the field key
    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    /// Get the field value
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// True when a value is empty or whitespace-only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, KEY_VALUE_SEPARATOR, self.value)
    }
}

/// Parses `Key=Value`, splitting on the first `=`
///
/// The value may be empty or contain further `=` characters; the key may not
/// be empty.
impl FromStr for Field {
    type Err = FieldlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) if !key.is_empty() => {
                Ok(Field::new(FieldKey::new(key.to_string()), value))
            }
            _ => Err(FieldlineError::InvalidField {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_key_equals_value() {
        let field = Field::new("TestKey", "teeest");
        assert_eq!(field.to_string(), "TestKey=teeest");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_serde_round_trip() {
        let field = Field::new("TestKey", "teeest");
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"key":"TestKey","value":"teeest"}"#);

        let deserialized: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, field);
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let field: Field = "Query=a=b".parse().unwrap();
        assert_eq!(field.key().name(), "Query");
        assert_eq!(field.value(), "a=b");
    }

    #[test]
    fn test_parse_allows_empty_value() {
        let field: Field = "TestKey=".parse().unwrap();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = "novalue".parse::<Field>().unwrap_err();
        assert_eq!(
            err,
            FieldlineError::InvalidField {
                input: "novalue".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        assert!("=value".parse::<Field>().is_err());
    }

    #[test]
    fn test_display_constructor() {
        let field = Field::display("Count", &42);
        assert_eq!(field.value(), "42");
    }
}
