//! Field-level validation errors, as returned by the backend and shown next to
//! form inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Messages keyed by form field name (`"email"`, `"numberOfInstallments"`, ...).
///
/// Errors that belong to no single field (network failures, unexpected
/// statuses) are stored under [`FieldErrors::FORM`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Key for errors not tied to a specific input.
    pub const FORM: &'static str = "form";

    pub fn new() -> Self {
        Self::default()
    }

    /// A single form-level message.
    pub fn form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(Self::FORM, message);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// First message for `field`, which is what the forms display.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.first(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for FieldErrors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field() {
        let errors: FieldErrors = [
            ("email", "The email field is required."),
            ("email", "The email must be a valid email address."),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.first("email"), Some("The email field is required."));
        assert_eq!(errors.first("password"), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_deserializes_laravel_error_bag() {
        let errors: FieldErrors =
            serde_json::from_str(r#"{"amount": ["The amount must be a number."]}"#).unwrap();
        assert_eq!(errors.first("amount"), Some("The amount must be a number."));
        assert!(!errors.has("description"));
    }

    #[test]
    fn test_form_level_error() {
        let mut errors = FieldErrors::form("offline");
        assert!(errors.has(FieldErrors::FORM));
        errors.clear();
        assert!(errors.is_empty());
    }
}
