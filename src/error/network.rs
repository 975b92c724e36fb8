//! Network-related error types.
//!
//! These errors cover the HTTP transport to the backend: connection
//! failures, timeouts, and non-auth status errors.

use std::fmt;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String },

    /// HTTP status error (non-2xx response, not an auth failure).
    HttpStatus { status: u16, message: String },

    /// The response body could not be decoded.
    InvalidResponse { message: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Timeout { operation } => {
                format!("The {} request timed out. Please try again.", operation)
            }
            NetworkError::HttpStatus { status, message } => match *status {
                400 => "The request was invalid. Please try again.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The server is experiencing issues. Please try again later.".to_string()
                }
                _ => format!("The server returned an error ({}): {}", status, message),
            },
            NetworkError::InvalidResponse { .. } => {
                "The server returned an unexpected response.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "NET_CONNECT",
            NetworkError::Timeout { .. } => "NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "NET_STATUS",
            NetworkError::InvalidResponse { .. } => "NET_DECODE",
            NetworkError::Other { .. } => "NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection to {} failed: {}", url, message)
            }
            NetworkError::Timeout { operation } => write!(f, "{} timed out", operation),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a reqwest transport error into a [`NetworkError`].
///
/// Status-code errors are not produced here; callers inspect the status
/// themselves to decide between [`NetworkError::HttpStatus`] and an auth
/// error.
pub fn classify_reqwest_error(operation: &str, err: &reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout {
            operation: operation.to_string(),
        }
    } else if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            message: err.to_string(),
        }
    } else if err.is_decode() {
        NetworkError::InvalidResponse {
            message: err.to_string(),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        let server = NetworkError::HttpStatus {
            status: 503,
            message: "unavailable".to_string(),
        };
        let client = NetworkError::HttpStatus {
            status: 404,
            message: "missing".to_string(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
    }

    #[test]
    fn test_timeout_is_retryable() {
        let err = NetworkError::Timeout {
            operation: "dashboard".to_string(),
        };
        assert!(err.is_retryable());
        assert!(err.user_message().contains("dashboard"));
    }

    #[test]
    fn test_invalid_response_not_retryable() {
        let err = NetworkError::InvalidResponse {
            message: "missing field".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.error_code(), "NET_DECODE");
    }

    #[test]
    fn test_display_carries_status() {
        let err = NetworkError::HttpStatus {
            status: 418,
            message: "teapot".to_string(),
        };
        assert!(err.to_string().contains("418"));
    }
}
