use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use store::{FieldErrors, LoginCredentials, NewExpense, Registration};

use crate::backend::{Backend, EXPENSES_PATH, LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH};
use crate::error::ApiError;

/// One request as the backend would have received it.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub path: &'static str,
    pub body: Option<Value>,
}

/// In-memory Backend for tests and offline previews. Records every request
/// and answers with the configured outcome.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    rejection: Arc<Mutex<Option<FieldErrors>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every following request with a validation failure.
    pub fn reject_with(&self, errors: FieldErrors) {
        if let Ok(mut rejection) = self.rejection.lock() {
            *rejection = Some(errors);
        }
    }

    /// Answer every following request with success.
    pub fn accept(&self) {
        if let Ok(mut rejection) = self.rejection.lock() {
            *rejection = None;
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn record<T: Serialize>(&self, path: &'static str, body: Option<&T>) -> Result<(), ApiError> {
        let body = body.map(serde_json::to_value).transpose()?;
        tracing::debug!("recorded POST {path}");
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest { path, body });
        }
        match self.rejection.lock().ok().and_then(|r| r.clone()) {
            Some(errors) => Err(ApiError::Validation(errors)),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl Backend for RecordingBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        self.record(LOGIN_PATH, Some(credentials))
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.record(REGISTER_PATH, Some(registration))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record::<()>(LOGOUT_PATH, None)
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        self.record(EXPENSES_PATH, Some(expense))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_records_login_body() {
        let backend = RecordingBackend::new();
        let credentials = LoginCredentials {
            email: "jean@example.com".to_string(),
            password: "secret".to_string(),
        };
        backend.login(&credentials).await.unwrap();

        assert_eq!(
            backend.requests(),
            vec![RecordedRequest {
                path: LOGIN_PATH,
                body: Some(json!({"email": "jean@example.com", "password": "secret"})),
            }]
        );
    }

    #[tokio::test]
    async fn test_logout_has_no_body() {
        let backend = RecordingBackend::new();
        backend.logout().await.unwrap();
        assert_eq!(backend.requests()[0].body, None);
    }

    #[tokio::test]
    async fn test_rejection_still_records() {
        let backend = RecordingBackend::new();
        backend.reject_with(FieldErrors::from_iter([("email", "taken")]));
        let err = backend.logout().await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(backend.requests().len(), 1);

        backend.accept();
        assert!(backend.logout().await.is_ok());
    }
}
