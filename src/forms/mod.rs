//! Local input validation for the auth forms.
//!
//! Pure, synchronous checks run before any network call: email shape,
//! password length, required fields. Each validator returns every
//! failed rule so a form can mark all offending fields at once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

fn check_email(email: &str, errors: &mut Vec<ValidationError>) {
    if email.is_empty() {
        errors.push(ValidationError::new("email", "Email is required"));
    } else if !EMAIL_RE.is_match(email) {
        errors.push(ValidationError::new("email", "Invalid email format"));
    }
}

fn check_password(password: &str, errors: &mut Vec<ValidationError>) {
    if password.is_empty() {
        errors.push(ValidationError::new("password", "Password is required"));
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(ValidationError::new(
            "password",
            format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            ),
        ));
    }
}

/// Login form (also used by the password-reset screen).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validate, returning every failed rule.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Validate, returning every failed rule.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push(ValidationError::new("username", "Username is required"));
        }
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Email verification form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationForm {
    pub email: String,
    pub code: String,
}

impl VerificationForm {
    /// Validate, returning every failed rule.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        if self.code.trim().is_empty() {
            errors.push(ValidationError::new("code", "Verification code is required"));
        } else if !self.code.trim().chars().all(|c| c.is_ascii_digit()) {
            errors.push(ValidationError::new(
                "code",
                "Verification code must be numeric",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
