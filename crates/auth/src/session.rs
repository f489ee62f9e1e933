//! Persisted session record (read-only to this client).

use serde_json::Value;

use crate::Role;

/// The minimal persisted fact of "who is logged in and in what role".
///
/// Written by the login flow, read here. Only `role` is consulted; any other
/// keys the login flow stored are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub role: Option<Role>,
}

impl SessionRecord {
    pub fn with_role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    /// Decode the raw stored value.
    ///
    /// Absence, unparseable JSON and a falsy JSON value (`null`, `false`, `0`,
    /// `""`) mean "no session". Any other JSON value is a session; its role is
    /// the `role` key when that is a string, and `None` otherwise (including
    /// for non-object values).
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        let value: Value = match serde_json::from_str(raw?) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed session record");
                return None;
            }
        };

        if !is_truthy(&value) {
            return None;
        }

        let role = value
            .get("role")
            .and_then(Value::as_str)
            .map(|role| Role::new(role.to_owned()));

        Some(Self { role })
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
