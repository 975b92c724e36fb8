//! Authentication-related error types.
//!
//! These errors represent rejected or missing credentials: the backend
//! refusing a bearer token, or an operation attempted without a session.

use std::fmt;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No token is available (user not logged in).
    NotAuthenticated,

    /// The backend rejected the bearer token (401).
    TokenRejected { message: String },

    /// The login/signup/reset call itself was refused.
    CredentialsRejected { status: u16, message: String },
}

impl AuthError {
    /// Check if this error might be resolved by logging in again.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            AuthError::NotAuthenticated | AuthError::TokenRejected { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::NotAuthenticated => {
                "You are not signed in. Please sign in to continue.".to_string()
            }
            AuthError::TokenRejected { .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            AuthError::CredentialsRejected { status, message } => match *status {
                401 | 403 => "Invalid email or password.".to_string(),
                _ => format!("Sign-in failed: {}", message),
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NotAuthenticated => "AUTH_NONE",
            AuthError::TokenRejected { .. } => "AUTH_REJECTED",
            AuthError::CredentialsRejected { .. } => "AUTH_LOGIN_FAILED",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::TokenRejected { message } => {
                write!(f, "Token rejected: {}", message)
            }
            AuthError::CredentialsRejected { status, message } => {
                write!(f, "Credentials rejected ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for AuthError {}
