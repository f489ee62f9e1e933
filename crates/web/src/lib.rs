//! `rim-web`
//!
//! **Responsibility:** browser client for account registration and role-based
//! landing.
//!
//! This crate provides:
//! - Client configuration (API base url, session storage key)
//! - Session storage access (read-only use of the login flow's record)
//! - The registration endpoint client and the signup submission flow
//! - The Leptos frontend (`wasm32` only)
//!
//! The rules themselves live in `rim-auth`; this crate is the thin shell that
//! feeds them input and acts on their answers.

pub mod config;
pub mod flow;
pub mod registration;
pub mod session_store;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{ClientConfig, ConfigError};
pub use flow::{RegistrationFlow, SubmitOutcome};
pub use registration::{
    GatewayResponse, HttpRegistrationGateway, RegistrationError, RegistrationGateway,
};
pub use session_store::{SessionStore, load_session};
