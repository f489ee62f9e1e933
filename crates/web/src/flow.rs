//! Registration form state and submission flow.
//!
//! The flow owns the form values, the per-field errors and the success popup
//! flag for one signup view. Each user action runs to completion and replaces
//! the state it touches wholesale.

use rim_auth::{Field, FieldErrors, RegistrationForm, Route};
use rim_core::DomainError;

use crate::registration::{GatewayResponse, RegistrationError, RegistrationGateway};

/// Shown when the server answers with a success status other than 201 and no message.
pub const REGISTRATION_FAILED: &str = "Registration failed.";

/// Shown for transport failures and error statuses without a message.
pub const GENERIC_RETRY: &str = "An error occurred. Please try again.";

/// Result of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally; no request was issued.
    Invalid(FieldErrors),
    /// The account was created.
    Registered,
    /// The request failed; the message is meant for the user.
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFlow {
    form: RegistrationForm,
    errors: FieldErrors,
    popup_visible: bool,
}

impl RegistrationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    /// Replace one field's value and drop its now-stale error.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Change handler keyed by the input's `name` attribute.
    pub fn edit_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), DomainError> {
        let field = name.parse::<Field>()?;
        self.edit(field, value);
        Ok(())
    }

    /// Validate the current form.
    ///
    /// Returns the snapshot to send when every rule passes. Otherwise the new
    /// errors are stored and nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<RegistrationForm> {
        self.errors = self.form.validate_all();
        if self.errors.is_clear() {
            Some(self.form.clone())
        } else {
            tracing::debug!(
                invalid_fields = self.errors.iter().count(),
                "registration rejected locally"
            );
            None
        }
    }

    /// Apply the endpoint's answer for a submission started by [`Self::begin_submit`].
    pub fn complete_submit(
        &mut self,
        result: Result<GatewayResponse, RegistrationError>,
    ) -> SubmitOutcome {
        match result {
            Ok(GatewayResponse::Created) => {
                tracing::info!(username = %self.form.username, "registration succeeded");
                self.popup_visible = true;
                self.form = RegistrationForm::default();
                self.errors = FieldErrors::default();
                SubmitOutcome::Registered
            }
            Ok(GatewayResponse::Rejected { status, message }) => {
                tracing::warn!(status, ?message, "registration rejected by server");
                let fallback = if (200..300).contains(&status) {
                    REGISTRATION_FAILED
                } else {
                    GENERIC_RETRY
                };
                SubmitOutcome::Failed(message.unwrap_or_else(|| fallback.to_string()))
            }
            Err(err) => {
                tracing::error!(error = %err, "registration request failed");
                SubmitOutcome::Failed(GENERIC_RETRY.to_string())
            }
        }
    }

    /// Validate, then issue at most one registration request.
    pub async fn submit(&mut self, gateway: &dyn RegistrationGateway) -> SubmitOutcome {
        let Some(form) = self.begin_submit() else {
            return SubmitOutcome::Invalid(self.errors);
        };

        let result = gateway.register(&form).await;
        self.complete_submit(result)
    }

    /// Close the success popup; the user continues to the login page.
    pub fn dismiss_popup(&mut self) -> Route {
        self.popup_visible = false;
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use rim_auth::FieldError;

    use super::*;

    fn filled() -> RegistrationFlow {
        let mut flow = RegistrationFlow::new();
        flow.edit(Field::Username, "field_tech");
        flow.edit(Field::Email, "tech@example.com");
        flow.edit(Field::Password, "Abcdef1!");
        flow.edit(Field::ConfirmPassword, "Abcdef1!");
        flow
    }

    #[test]
    fn empty_form_does_not_start_a_submission() {
        let mut flow = RegistrationFlow::new();
        assert_eq!(flow.begin_submit(), None);
        assert_eq!(flow.errors().iter().count(), 4);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut flow = RegistrationFlow::new();
        flow.begin_submit();

        flow.edit(Field::Email, "x");
        assert_eq!(flow.errors().email, None);
        assert_eq!(flow.errors().username, Some(FieldError::UsernameRequired));
        assert_eq!(flow.form().email, "x");
    }

    #[test]
    fn named_edit_maps_input_names_to_fields() {
        let mut flow = RegistrationFlow::new();
        flow.begin_submit();

        flow.edit_named("confirm_password", "Abcdef1!").unwrap();
        assert_eq!(flow.form().confirm_password, "Abcdef1!");
        assert_eq!(flow.errors().confirm_password, None);
        assert_eq!(flow.errors().password, Some(FieldError::PasswordRequired));
    }

    #[test]
    fn unknown_input_name_changes_nothing() {
        let mut flow = RegistrationFlow::new();
        flow.begin_submit();
        let before = flow.clone();

        let err = flow.edit_named("nickname", "sam").unwrap_err();
        assert_eq!(err, DomainError::unknown("form field", "nickname"));
        assert_eq!(flow, before);
    }

    #[test]
    fn created_resets_state_and_shows_popup() {
        let mut flow = filled();
        assert!(flow.begin_submit().is_some());

        let outcome = flow.complete_submit(Ok(GatewayResponse::Created));
        assert_eq!(outcome, SubmitOutcome::Registered);
        assert!(flow.popup_visible());
        assert_eq!(flow.form(), &RegistrationForm::default());
        assert!(flow.errors().is_clear());

        assert_eq!(flow.dismiss_popup(), Route::Login);
        assert!(!flow.popup_visible());
    }

    #[test]
    fn server_message_is_surfaced_and_values_kept() {
        let mut flow = filled();
        let sent = flow.begin_submit().unwrap();

        let outcome = flow.complete_submit(Ok(GatewayResponse::Rejected {
            status: 400,
            message: Some("Email taken".to_string()),
        }));
        assert_eq!(outcome, SubmitOutcome::Failed("Email taken".to_string()));
        assert_eq!(flow.form(), &sent);
        assert!(!flow.popup_visible());
    }

    #[test]
    fn fallbacks_depend_on_status_class() {
        let mut flow = filled();
        flow.begin_submit();

        assert_eq!(
            flow.complete_submit(Ok(GatewayResponse::Rejected {
                status: 200,
                message: None
            })),
            SubmitOutcome::Failed(REGISTRATION_FAILED.to_string())
        );
        assert_eq!(
            flow.complete_submit(Ok(GatewayResponse::Rejected {
                status: 500,
                message: None
            })),
            SubmitOutcome::Failed(GENERIC_RETRY.to_string())
        );
    }

    #[test]
    fn transport_failure_is_generic() {
        let mut flow = filled();
        flow.begin_submit();

        let outcome = flow.complete_submit(Err(RegistrationError::Transport(
            "connection refused".to_string(),
        )));
        assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_RETRY.to_string()));
        assert_eq!(flow.form().username, "field_tech");
    }
}
