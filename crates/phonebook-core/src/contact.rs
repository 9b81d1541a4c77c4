//! The `Person` record type.

use serde::{Deserialize, Serialize};

/// One phonebook entry.
///
/// The `id` is unique at creation time by convention only: generated ids are
/// random draws with no collision check (see [`crate::registry::Phonebook::add`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Numeric identifier, assigned at creation.
    pub id: u32,
    /// Display name, intended unique within the collection.
    pub name: String,
    /// Phone number, free-form text.
    pub number: String,
}

impl Person {
    /// Creates a person with an explicit id.
    pub fn new(id: u32, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
        }
    }
}
