//! Local input validation errors.
//!
//! Produced by the form validators before any network call is made.

use std::fmt;

/// A single failed validation rule for one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The form field that failed validation.
    pub field: &'static str,
    /// Human-readable reason, suitable for display next to the field.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        self.reason.clone()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        "VALIDATION"
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}
