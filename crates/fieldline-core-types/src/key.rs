//! Field keys with name-based identity
//!
//! A `FieldKey` classifies a value in a rendered log line. Two keys are the
//! same key when their names are equal, so keys created independently (for
//! example a reserved key and a caller-defined key spelled the same way)
//! collapse together during de-duplication.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::schema;

/// Named identifier for a field category
///
/// Equality and hashing consider the name only (case-sensitive, exact match).
/// A key never equals a non-key value such as a bare string; compare
/// `name()` for that. Keys are immutable once created.
///
/// # Example
///
/// ```
/// use fieldline_core_types::FieldKey;
///
/// static TEST_KEY: FieldKey = FieldKey::from_static("TestKey");
///
/// assert_eq!(TEST_KEY, FieldKey::new("TestKey"));
/// assert_ne!(TEST_KEY, FieldKey::new("testkey"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey {
    name: Cow<'static, str>,
}

impl FieldKey {
    /// Create a key from an owned or borrowed name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Create a key from a static name, usable in `static` items
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Get the key name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether this key belongs to the reserved, framework-generated set
    pub fn is_reserved(&self) -> bool {
        RESERVED.iter().any(|reserved| *reserved == self)
    }
}

impl PartialEq for FieldKey {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for FieldKey {}

// Must agree with `Borrow<str>`: a key hashes exactly like its name.
impl Hash for FieldKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&'static str> for FieldKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&FieldKey> for FieldKey {
    fn from(key: &FieldKey) -> Self {
        key.clone()
    }
}

pub static OPERATION: FieldKey = FieldKey::from_static(schema::KEY_OPERATION);
pub static OPERATION_STATUS: FieldKey = FieldKey::from_static(schema::KEY_OPERATION_STATUS);
pub static MESSAGE: FieldKey = FieldKey::from_static(schema::KEY_MESSAGE);
pub static EXCEPTION: FieldKey = FieldKey::from_static(schema::KEY_EXCEPTION);
pub static EXCEPTION_MESSAGE: FieldKey = FieldKey::from_static(schema::KEY_EXCEPTION_MESSAGE);
pub static STACK_TRACE: FieldKey = FieldKey::from_static(schema::KEY_STACK_TRACE);
pub static SOURCE_CONTEXT: FieldKey = FieldKey::from_static(schema::KEY_SOURCE_CONTEXT);

static RESERVED: [&FieldKey; 7] = [
    &OPERATION,
    &OPERATION_STATUS,
    &MESSAGE,
    &EXCEPTION,
    &EXCEPTION_MESSAGE,
    &STACK_TRACE,
    &SOURCE_CONTEXT,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{HashMap, HashSet};

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn is_equal_key(key: &FieldKey, other: &dyn Any) -> bool {
        other
            .downcast_ref::<FieldKey>()
            .is_some_and(|other| other == key)
    }

    #[test]
    fn test_equality_is_by_name() {
        let owned = FieldKey::new(String::from("Message"));
        assert_eq!(owned, MESSAGE);
        assert_eq!(FieldKey::new("TestKey"), FieldKey::from_static("TestKey"));
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(FieldKey::new("message"), MESSAGE);
        assert_ne!(FieldKey::new("Message "), MESSAGE);
    }

    #[test]
    fn test_hash_matches_name_hash() {
        let key = FieldKey::new("TestKey");
        assert_eq!(hash_of(&key), hash_of("TestKey"));
        assert_eq!(hash_of(&key), hash_of(&FieldKey::from_static("TestKey")));
    }

    #[test]
    fn test_keys_group_in_hash_set() {
        let mut set = HashSet::new();
        set.insert(FieldKey::new("TestKey"));
        set.insert(FieldKey::from_static("TestKey"));
        set.insert(FieldKey::new("TestKey2"));

        assert_eq!(set.len(), 2);
        assert!(set.contains("TestKey"));
    }

    #[test]
    fn test_lookup_by_name_in_hash_map() {
        let mut map = HashMap::new();
        map.insert(EXCEPTION.clone(), 1);

        assert_eq!(map.get("Exception"), Some(&1));
        assert_eq!(map.get("ExceptionMessage"), None);
    }

    #[test]
    fn test_absent_key_never_equals_present_key() {
        let absent: Option<&FieldKey> = None;
        assert_ne!(absent, Some(&MESSAGE));
    }

    #[test]
    fn test_compare_names_through_name() {
        assert_eq!(STACK_TRACE.name(), "StackTrace");
        assert_ne!(STACK_TRACE.name(), "Stacktrace");
    }

    #[test]
    fn test_key_never_equals_non_key_value() {
        let key = FieldKey::new("Message");
        let name: &dyn Any = &"Message";
        let owned: &dyn Any = &String::from("Message");

        assert!(!is_equal_key(&key, name));
        assert!(!is_equal_key(&key, owned));
        assert!(is_equal_key(&key, &FieldKey::new("Message")));
    }

    #[test]
    fn test_reserved_keys() {
        assert!(OPERATION.is_reserved());
        assert!(SOURCE_CONTEXT.is_reserved());
        assert!(FieldKey::new("Message").is_reserved());
        assert!(!FieldKey::new("TestKey").is_reserved());
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(format!("{}", OPERATION_STATUS), "OperationStatus");
    }

    #[test]
    fn test_serialization() {
        let key = FieldKey::new("TestKey");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"TestKey\"");

        let deserialized: FieldKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
