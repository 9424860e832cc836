//! Core types shared across fieldline facilities
//!
//! This crate provides the foundational types used by the line builder
//! and the logger:
//!
//! - **Field keys**: `FieldKey`, a name-identity key, and the reserved key set
//! - **Schema constants**: Canonical key names, separators and default texts

pub mod key;
pub mod schema;

pub use key::FieldKey;
