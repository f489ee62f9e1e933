//! Registration form model and the "validate all" pass.

use core::str::FromStr;

use rim_core::DomainError;

use crate::validation::{
    FieldError, validate_confirm_password, validate_email, validate_password, validate_username,
};

/// One input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// The input's `name` attribute (and JSON key on the wire).
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DomainError::unknown("form field", s))
    }
}

/// Candidate registration input. Free-form text until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Run every field rule and collect the results.
    pub fn validate_all(&self) -> FieldErrors {
        FieldErrors {
            username: validate_username(&self.username).err(),
            email: validate_email(&self.email).err(),
            password: validate_password(&self.password).err(),
            confirm_password: validate_confirm_password(&self.confirm_password, &self.password)
                .err(),
        }
    }
}

/// Per-field outcome of a validation pass. `None` means the field is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    /// The message to render next to `field`; empty when the field is valid.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|err| err.to_string()).unwrap_or_default()
    }

    pub fn clear(&mut self, field: Field) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = None;
    }

    /// Overall success: every entry is empty.
    pub fn is_clear(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|err| (field, err)))
    }
}
