//! # HTTP backend over `reqwest`
//!
//! [`HttpBackend`] posts JSON to the endpoints in [`crate::backend`] and maps
//! responses onto [`ApiError`]:
//!
//! | Response | Result |
//! |----------|--------|
//! | 2xx, 3xx | `Ok(())` (redirects are the backend's way of saying "done") |
//! | 422 with an error bag | `Err(ApiError::Validation)` |
//! | anything else with a JSON `message` | `Err(ApiError::Rejected)` |
//! | anything else | `Err(ApiError::Status)` |
//! | no response | `Err(ApiError::Transport)` |
//!
//! Requests send `Accept: application/json` and `X-Requested-With:
//! XMLHttpRequest` so the backend answers validation failures with a JSON
//! error bag instead of a redirect back to the form. In the browser, cookies
//! are included so the session survives cross-origin deployments, and the
//! `XSRF-TOKEN` cookie is echoed back as `X-XSRF-TOKEN` to pass the backend's
//! CSRF check.
//!
//! No retries and no timeouts: a request runs until the browser settles it.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use store::config::ApiConfig;
use store::{LoginCredentials, NewExpense, Registration};

use crate::backend::{Backend, EXPENSES_PATH, LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH};
use crate::error::{parse_validation_body, ApiError};

const XSRF_COOKIE: &str = "XSRF-TOKEN";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";
const REQUESTED_WITH_HEADER: &str = "X-Requested-With";

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: resolve_origin(config),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn build_request<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&T>,
        xsrf_token: Option<&str>,
    ) -> Result<reqwest::Request, ApiError> {
        let url = self.config.endpoint(path);
        let mut request = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(REQUESTED_WITH_HEADER, "XMLHttpRequest");
        if let Some(token) = xsrf_token {
            request = request.header(XSRF_HEADER, token);
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            request = request.header(CONTENT_TYPE, "application/json").body(payload);
        }
        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }
        Ok(request.build()?)
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: Option<&T>) -> Result<(), ApiError> {
        let xsrf_token = document_xsrf_token();
        if xsrf_token.is_none() {
            tracing::debug!("No {XSRF_COOKIE} cookie; sending {path} without a CSRF token");
        }
        let request = self.build_request(path, body, xsrf_token.as_deref())?;
        tracing::debug!("POST {}", request.url());

        let response = self.client.execute(request).await?;
        let status = response.status();
        if status.is_success() || status.is_redirection() {
            return Ok(());
        }

        let text = response.text().await?;
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            return match parse_validation_body(&text) {
                Ok(errors) => Err(ApiError::Validation(errors)),
                Err(e) => {
                    tracing::warn!("Unreadable validation response from {path}: {e}");
                    Err(ApiError::from_status(status.as_u16(), &text))
                }
            };
        }

        tracing::debug!("{path} answered {status}");
        Err(ApiError::from_status(status.as_u16(), &text))
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        self.post(LOGIN_PATH, Some(credentials)).await
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.post(REGISTER_PATH, Some(registration)).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post::<()>(LOGOUT_PATH, None).await
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        self.post(EXPENSES_PATH, Some(expense)).await
    }
}

/// An empty base URL means "same origin". `reqwest` needs an absolute URL, so
/// in the browser the page origin is filled in.
fn resolve_origin(config: ApiConfig) -> ApiConfig {
    if !config.base_url.is_empty() {
        return config;
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return ApiConfig::new(origin);
        }
    }

    tracing::warn!("No backend base URL configured; requests will fail");
    config
}

/// Raw value of the `XSRF-TOKEN` cookie in a `document.cookie` string. The
/// backend URL-encodes it, so it still needs decoding before use.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn xsrf_cookie(cookies: &str) -> Option<&str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == XSRF_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn document_xsrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    let raw = xsrf_cookie(&cookies)?;
    match js_sys::decode_uri_component(raw) {
        Ok(decoded) => Some(String::from(decoded)),
        Err(e) => {
            tracing::warn!("Undecodable {XSRF_COOKIE} cookie: {e:?}");
            None
        }
    }
}

/// Outside the browser there is no cookie jar to read from.
#[cfg(not(target_arch = "wasm32"))]
fn document_xsrf_token() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_url_is_kept() {
        let backend = HttpBackend::new(ApiConfig::new("http://localhost:8000"));
        assert_eq!(backend.config().endpoint(LOGIN_PATH), "http://localhost:8000/login");
    }

    #[test]
    fn test_request_carries_csrf_headers_when_token_known() {
        let backend = HttpBackend::new(ApiConfig::new("http://localhost:8000"));
        let credentials = LoginCredentials {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };
        let request = backend
            .build_request(LOGIN_PATH, Some(&credentials), Some("eyJpdiI6IjEyMyJ9=="))
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers.get(XSRF_HEADER).unwrap(), "eyJpdiI6IjEyMyJ9==");
        assert_eq!(headers.get(REQUESTED_WITH_HEADER).unwrap(), "XMLHttpRequest");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(request.url().as_str(), "http://localhost:8000/login");
    }

    #[test]
    fn test_request_without_token_omits_csrf_header() {
        let backend = HttpBackend::new(ApiConfig::new("http://localhost:8000"));
        let request = backend.build_request::<()>(LOGOUT_PATH, None, None).unwrap();

        assert!(request.headers().get(XSRF_HEADER).is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(request.headers().get(REQUESTED_WITH_HEADER).unwrap(), "XMLHttpRequest");
    }

    #[test]
    fn test_xsrf_cookie_lookup() {
        let cookies = "theme=dark; XSRF-TOKEN=eyJpdiI6Ik%3D%3D; fiscalis_session=abc";
        assert_eq!(xsrf_cookie(cookies), Some("eyJpdiI6Ik%3D%3D"));
        assert_eq!(xsrf_cookie("XSRF-TOKEN=first"), Some("first"));
        assert_eq!(xsrf_cookie("OTHER-XSRF-TOKEN=x; session=abc"), None);
        assert_eq!(xsrf_cookie("XSRF-TOKEN="), None);
        assert_eq!(xsrf_cookie(""), None);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Nothing listens on port 9 (discard) in the test environment.
        let backend = HttpBackend::new(ApiConfig::new("http://127.0.0.1:9"));
        let err = backend.logout().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
