//! Unified error type for the client core.
//!
//! `ClientError` consolidates the domain-specific error types so callers
//! can handle every fallible operation through one enum while still
//! matching on the underlying domain when they need to.

use std::fmt;

use super::auth::AuthError;
use super::network::NetworkError;
use super::persistence::PersistenceError;
use super::validation::ValidationError;

/// High-level classification used for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connectivity or server trouble; usually retryable.
    Network,
    /// Credentials missing or rejected; requires sign-in.
    Auth,
    /// Durable storage trouble on this device.
    Persistence,
    /// The user's input was malformed; no call was made.
    Validation,
}

/// Unified error type for the client core.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Network-related errors (connections, HTTP, timeouts).
    Network(NetworkError),

    /// Authentication/authorization errors.
    Auth(AuthError),

    /// Durable credential-store errors.
    Persistence(PersistenceError),

    /// Local input validation errors.
    Validation(ValidationError),
}

impl ClientError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Network(_) => ErrorCategory::Network,
            ClientError::Auth(_) => ErrorCategory::Auth,
            ClientError::Persistence(_) => ErrorCategory::Persistence,
            ClientError::Validation(_) => ErrorCategory::Validation,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(err) => err.is_retryable(),
            ClientError::Auth(_) => false,
            ClientError::Persistence(err) => err.is_transient(),
            ClientError::Validation(_) => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(err) => err.user_message(),
            ClientError::Auth(err) => err.user_message(),
            ClientError::Persistence(err) => err.user_message(),
            ClientError::Validation(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Network(err) => err.error_code(),
            ClientError::Auth(err) => err.error_code(),
            ClientError::Persistence(err) => err.error_code(),
            ClientError::Validation(err) => err.error_code(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(err) => write!(f, "{}", err),
            ClientError::Auth(err) => write!(f, "{}", err),
            ClientError::Persistence(err) => write!(f, "{}", err),
            ClientError::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<NetworkError> for ClientError {
    fn from(err: NetworkError) -> Self {
        ClientError::Network(err)
    }
}

impl From<AuthError> for ClientError {
    fn from(err: AuthError) -> Self {
        ClientError::Auth(err)
    }
}

impl From<PersistenceError> for ClientError {
    fn from(err: PersistenceError) -> Self {
        ClientError::Persistence(err)
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}
