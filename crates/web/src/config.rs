//! Client configuration.
//!
//! The browser has no environment, so the browser build bakes
//! `RIM_API_URL` / `RIM_SESSION_KEY` in at compile time. Native callers
//! (tests, tooling) build a config explicitly.

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Storage key the login flow writes the session record under.
pub const DEFAULT_SESSION_KEY: &str = "userData";

pub const REGISTER_USER_PATH: &str = "/api/registerUser";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base url '{0}': expected an http:// or https:// url")]
    InvalidBaseUrl(String),

    #[error("session key must not be empty")]
    EmptySessionKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
    session_key: String,
}

impl ClientConfig {
    pub fn new(
        api_base_url: impl Into<String>,
        session_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = normalize_base_url(api_base_url.into())?;
        let session_key = session_key.into();
        if session_key.trim().is_empty() {
            return Err(ConfigError::EmptySessionKey);
        }

        Ok(Self {
            api_base_url,
            session_key,
        })
    }

    /// Compile-time configuration for the browser build.
    #[cfg(target_arch = "wasm32")]
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("RIM_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("RIM_SESSION_KEY").unwrap_or(DEFAULT_SESSION_KEY),
        )
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub fn register_user_url(&self) -> String {
        format!("{}{}", self.api_base_url, REGISTER_USER_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

fn normalize_base_url(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));

    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw))
    }
}
