//! Field rules for the registration form.
//!
//! Each rule is a pure function of the candidate value. Rules are checked in
//! order and the first failing one is reported. Invalid input is never a
//! fault: the result is a [`FieldError`] value to show next to the input.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Characters that satisfy the password "special character" rule.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Whitespace as browsers' regex engines define `\s` (ECMAScript WhiteSpace
/// and LineTerminator). Unicode `White_Space` differs: it includes U+0085 and
/// excludes U+FEFF.
const BROWSER_WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Permissive shape check, not RFC 5322.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^@{BROWSER_WHITESPACE}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

/// Why a field value was refused. `Display` is the user-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Username must be less than 30 characters")]
    UsernameTooLong,
    #[error("Username can only contain letters, numbers, underscores, and hyphens")]
    UsernameCharset,

    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain at least one uppercase letter")]
    PasswordMissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    PasswordMissingLowercase,
    #[error("Password must contain at least one number")]
    PasswordMissingDigit,
    #[error("Password must contain at least one special character")]
    PasswordMissingSpecial,

    #[error("Please confirm your password")]
    ConfirmationRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Length as the browser counts it (UTF-16 code units).
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_username(username: &str) -> Result<(), FieldError> {
    if username.is_empty() {
        return Err(FieldError::UsernameRequired);
    }
    let len = input_len(username);
    if len < USERNAME_MIN_LEN {
        return Err(FieldError::UsernameTooShort);
    }
    if len > USERNAME_MAX_LEN {
        return Err(FieldError::UsernameTooLong);
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(FieldError::UsernameCharset);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if input_len(password) < PASSWORD_MIN_LEN {
        return Err(FieldError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(FieldError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(FieldError::PasswordMissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::PasswordMissingDigit);
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Err(FieldError::PasswordMissingSpecial);
    }
    Ok(())
}

/// Exact string equality; no trimming or normalisation.
pub fn validate_confirm_password(confirm_password: &str, password: &str) -> Result<(), FieldError> {
    if confirm_password.is_empty() {
        return Err(FieldError::ConfirmationRequired);
    }
    if confirm_password != password {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
