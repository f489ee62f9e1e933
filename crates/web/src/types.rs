//! Wire types shared by the native client and the WASM frontend.
//!
//! These types must not depend on target-specific dependencies.

use serde::{Deserialize, Serialize};

use rim_auth::RegistrationForm;

/// Body of `POST /api/registerUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a RegistrationForm> for RegisterUserRequest<'a> {
    fn from(form: &'a RegistrationForm) -> Self {
        Self {
            username: &form.username,
            email: &form.email,
            password: &form.password,
            confirm_password: &form.confirm_password,
        }
    }
}

/// Server reply body. Only `message` is read; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// Extract a non-empty `message` from a raw response body, if any.
    pub fn from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.message)
            .filter(|m| !m.is_empty())
    }
}
