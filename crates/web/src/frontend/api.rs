//! Browser-side wiring: configuration, session lookup, registration gateway.

use rim_auth::SessionRecord;

use crate::config::ClientConfig;
use crate::registration::HttpRegistrationGateway;
use crate::session_store::{BrowserSessionStore, load_session};

/// Build-time configuration, or the defaults if it was invalid.
pub fn config() -> ClientConfig {
    ClientConfig::from_build_env().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid build configuration; using defaults");
        ClientConfig::default()
    })
}

/// Read the session record the login flow left in `localStorage`.
pub fn stored_session(config: &ClientConfig) -> Option<SessionRecord> {
    load_session(&BrowserSessionStore, config.session_key())
}

pub fn registration_gateway(config: &ClientConfig) -> HttpRegistrationGateway {
    HttpRegistrationGateway::new(config)
}

/// Blocking browser alert, used for submission failures.
pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}
