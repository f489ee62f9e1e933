//! `rim-auth` — account registration rules and role-based landing dispatch.
//!
//! This crate is intentionally decoupled from HTTP, storage and rendering:
//! everything here is a pure function of its arguments.

pub mod registration;
pub mod roles;
pub mod router;
pub mod routes;
pub mod session;
pub mod validation;

pub use registration::{Field, FieldErrors, RegistrationForm};
pub use roles::{Role, RoleKind};
pub use router::route_for_session;
pub use routes::Route;
pub use session::SessionRecord;
pub use validation::{
    FieldError, validate_confirm_password, validate_email, validate_password, validate_username,
};
