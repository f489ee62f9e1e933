//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Field-level validation of user input is *not* an error at this layer (it is
/// reported as a value, see `rim_auth::FieldErrors`). This type covers names
/// crossing into the domain from untyped sources, such as DOM input names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name did not identify any known item.
    #[error("unknown {kind}: '{name}'")]
    Unknown { kind: &'static str, name: String },
}

impl DomainError {
    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            name: name.into(),
        }
    }
}
