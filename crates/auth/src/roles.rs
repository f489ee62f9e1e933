use std::borrow::Cow;

/// Role identifier as written to the session record by the login flow.
///
/// Roles stay opaque strings at this layer: the login service may hand out
/// roles this client does not know about, and those must still be accepted.
/// Use [`Role::kind`] to branch on the roles the client does know.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role(Cow<'static, str>);

/// Roles the client knows how to dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Admin,
    Technician,
    User,
    /// Anything else the login flow stored.
    Other,
}

impl Role {
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));
    pub const TECHNICIAN: Role = Role(Cow::Borrowed("technician"));
    pub const USER: Role = Role(Cow::Borrowed("user"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the role. Matching is exact (case-sensitive).
    pub fn kind(&self) -> RoleKind {
        match self.as_str() {
            "admin" => RoleKind::Admin,
            "technician" => RoleKind::Technician,
            "user" => RoleKind::User,
            _ => RoleKind::Other,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
