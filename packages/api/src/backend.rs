//! The outbound contract with the Fiscalis backend.

use async_trait::async_trait;
use store::{LoginCredentials, NewExpense, Registration};

use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const LOGOUT_PATH: &str = "/logout";
pub const EXPENSES_PATH: &str = "/expenses";

/// Every request the front end makes. Each call is a single POST; the result
/// carries nothing beyond success or the reason for failure.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Backend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError>;

    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    async fn create_expense(&self, expense: &NewExpense) -> Result<(), ApiError>;
}
