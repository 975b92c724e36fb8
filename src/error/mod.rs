//! Error handling for the Moodify client core.
//!
//! This module provides:
//!
//! - **Domain-specific errors**: Persistence, Network, Auth, and
//!   Validation errors with user-facing messages
//! - **Unified error type**: [`ClientError`] consolidates the domain
//!   errors for callers that handle everything in one place
//! - **Error categories**: high-level classification for handling
//!   decisions (retry, re-auth, report)
//!
//! User cancellation of the image picker is deliberately absent from
//! this taxonomy: it is a normal outcome
//! ([`crate::traits::CaptureOutcome::Cancelled`]), not a failure.
//!
//! # Example
//!
//! ```ignore
//! use moodify::error::ClientError;
//!
//! match client.fetch_dashboard(&token).await {
//!     Ok(dashboard) => render(dashboard),
//!     Err(err) => {
//!         eprintln!("{}", err.user_message());
//!         if err.is_retryable() {
//!             schedule_retry();
//!         }
//!     }
//! }
//! ```

mod auth;
mod client;
mod network;
mod persistence;
mod validation;

pub use auth::AuthError;
pub use client::{ClientError, ErrorCategory};
pub use network::{classify_reqwest_error, NetworkError};
pub use persistence::PersistenceError;
pub use validation::ValidationError;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Errors from every domain funnel through the unified type.
    #[test]
    fn test_error_unification() {
        let net_err: ClientError = NetworkError::Timeout {
            operation: "login".to_string(),
        }
        .into();
        let auth_err: ClientError = AuthError::NotAuthenticated.into();
        let persist_err: ClientError = PersistenceError::SaveFailed {
            message: "read-only fs".to_string(),
        }
        .into();
        let valid_err: ClientError = ValidationError::new("email", "Email is required").into();

        assert_eq!(net_err.category(), ErrorCategory::Network);
        assert_eq!(auth_err.category(), ErrorCategory::Auth);
        assert_eq!(persist_err.category(), ErrorCategory::Persistence);
        assert_eq!(valid_err.category(), ErrorCategory::Validation);

        // Only transport and transient storage trouble is retryable.
        assert!(net_err.is_retryable());
        assert!(persist_err.is_retryable());
        assert!(!auth_err.is_retryable());
        assert!(!valid_err.is_retryable());
    }
}
