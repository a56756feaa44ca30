//! Errors from talking to the backend.

use serde::Deserialize;
use store::FieldErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the submitted fields (HTTP 422).
    #[error("validation failed")]
    Validation(FieldErrors),
    /// A non-success response that explained itself with a JSON `message`.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl ApiError {
    /// Error for a non-success, non-422 response, keeping the backend's own
    /// message when it sent one.
    pub fn from_status(status: u16, body: &str) -> Self {
        match parse_error_message(body) {
            Some(message) => ApiError::Rejected { status, message },
            None => ApiError::Status(status),
        }
    }

    /// Errors ready to show on a form. Anything that is not a validation
    /// failure becomes a single form-level message.
    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            ApiError::Validation(errors) => errors,
            other => FieldErrors::form(other.to_string()),
        }
    }
}

/// Body of a 422 response: `{"message": "...", "errors": {"field": ["..."]}}`.
#[derive(Debug, Deserialize)]
struct ValidationBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: FieldErrors,
}

/// Parse a validation response body. A body with a message but no field
/// errors yields the message as a form-level error.
pub fn parse_validation_body(body: &str) -> Result<FieldErrors, serde_json::Error> {
    let parsed: ValidationBody = serde_json::from_str(body)?;
    if parsed.errors.is_empty() {
        if let Some(message) = parsed.message {
            return Ok(FieldErrors::form(message));
        }
    }
    Ok(parsed.errors)
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// The `message` of a JSON error body such as Laravel's
/// `{"message": "CSRF token mismatch."}`. `None` for HTML pages, empty
/// messages and anything else without one.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .map(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_errors() {
        let errors = parse_validation_body(
            r#"{
                "message": "The email field is required. (and 1 more error)",
                "errors": {
                    "email": ["The email field is required."],
                    "password": ["The password field is required."]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(errors.first("email"), Some("The email field is required."));
        assert_eq!(errors.first("password"), Some("The password field is required."));
        assert!(!errors.has(FieldErrors::FORM));
    }

    #[test]
    fn test_message_only_body() {
        let errors = parse_validation_body(r#"{"message": "Too many attempts."}"#).unwrap();
        assert_eq!(errors.first(FieldErrors::FORM), Some("Too many attempts."));
    }

    #[test]
    fn test_garbage_body() {
        assert!(parse_validation_body("<html>").is_err());
    }

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            parse_error_message(r#"{"message": "CSRF token mismatch."}"#).as_deref(),
            Some("CSRF token mismatch.")
        );
        assert_eq!(parse_error_message("<!DOCTYPE html><title>Page Expired</title>"), None);
        assert_eq!(parse_error_message(r#"{"message": ""}"#), None);
        assert_eq!(parse_error_message(r#"{"error": "nope"}"#), None);
    }

    #[test]
    fn test_status_errors_keep_backend_message() {
        let err = ApiError::from_status(419, r#"{"message": "CSRF token mismatch."}"#);
        assert!(matches!(&err, ApiError::Rejected { status: 419, .. }));
        assert_eq!(
            err.into_field_errors().first(FieldErrors::FORM),
            Some("CSRF token mismatch.")
        );

        let err = ApiError::from_status(500, "Server Error");
        assert!(matches!(err, ApiError::Status(500)));
    }

    #[test]
    fn test_non_validation_errors_become_form_errors() {
        let errors = ApiError::Status(500).into_field_errors();
        assert_eq!(
            errors.first(FieldErrors::FORM),
            Some("unexpected response status 500")
        );

        let errors = ApiError::Transport("offline".to_string()).into_field_errors();
        assert_eq!(errors.first(FieldErrors::FORM), Some("request failed: offline"));
    }
}
