//! Request data transfer objects for the phonebook API.
//!
//! Responses serialize [`Person`] directly; only the write routes need a
//! dedicated payload type.

use serde::Deserialize;

pub use phonebook_core::contact::Person;

/// Body of `POST /api/persons` and `PUT /api/persons/:id`.
///
/// Both fields deserialize as optional so the handlers can answer missing
/// keys with the API's own error message instead of a decode rejection.
#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl ContactPayload {
    /// Returns `(name, number)` when both fields are present and non-empty.
    pub fn into_fields(self) -> Option<(String, String)> {
        match (self.name, self.number) {
            (Some(name), Some(number)) if !name.is_empty() && !number.is_empty() => {
                Some((name, number))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_with_both_fields_yields_them() {
        let payload: ContactPayload =
            serde_json::from_str(r#"{"name": "Arto", "number": "040"}"#).unwrap();
        assert_eq!(
            payload.into_fields(),
            Some(("Arto".to_string(), "040".to_string()))
        );
    }

    #[test]
    fn missing_or_empty_fields_yield_none() {
        let missing: ContactPayload = serde_json::from_str(r#"{"name": "Arto"}"#).unwrap();
        assert_eq!(missing.into_fields(), None);

        let empty: ContactPayload =
            serde_json::from_str(r#"{"name": "", "number": "040"}"#).unwrap();
        assert_eq!(empty.into_fields(), None);
    }
}
