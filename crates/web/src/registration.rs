//! Registration endpoint client.
//!
//! A single best-effort attempt per call: no retries, no idempotency key,
//! no timeout beyond the transport default.

use async_trait::async_trait;
use thiserror::Error;

use rim_auth::RegistrationForm;

use crate::config::ClientConfig;
use crate::types::{ApiMessage, RegisterUserRequest};

/// How the registration endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayResponse {
    /// HTTP 201.
    Created,
    /// Any other status, with the body's `message` if it carried one.
    Rejected { status: u16, message: Option<String> },
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The request never produced a response (unreachable, DNS, reset, ...).
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Seam between the submission flow and the network.
///
/// `?Send`: calls are driven from a single-threaded UI event loop.
#[async_trait(?Send)]
pub trait RegistrationGateway {
    async fn register(&self, form: &RegistrationForm) -> Result<GatewayResponse, RegistrationError>;
}

/// `POST {base-url}/api/registerUser` over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpRegistrationGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRegistrationGateway {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            endpoint: config.register_user_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn register(&self, form: &RegistrationForm) -> Result<GatewayResponse, RegistrationError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&RegisterUserRequest::from(form))
            .send()
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::CREATED {
            return Ok(GatewayResponse::Created);
        }

        // An unreadable body still counts as a server answer, just without a message.
        let body = resp.text().await.unwrap_or_default();
        Ok(GatewayResponse::Rejected {
            status: status.as_u16(),
            message: ApiMessage::from_body(&body),
        })
    }
}
