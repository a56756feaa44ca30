//! # API crate: the Fiscalis front end's view of its backend
//!
//! The backend is an external service. This crate defines what the front end
//! sends it and how answers are interpreted; it implements none of the
//! server-side behaviour.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait and the endpoint paths |
//! | [`error`] | [`ApiError`] and parsing of validation error bags |
//! | `http` | [`HttpBackend`], the `reqwest` implementation used in the browser |
//! | `recording` | [`RecordingBackend`], an in-memory implementation that records requests |
//!
//! Request bodies ([`store::LoginCredentials`], [`store::Registration`],
//! [`store::NewExpense`]) live in the `store` crate next to the forms that
//! produce them.

pub mod backend;
pub mod error;

mod http;
pub use http::HttpBackend;

mod recording;
pub use recording::{RecordedRequest, RecordingBackend};

pub use backend::Backend;
pub use error::ApiError;
