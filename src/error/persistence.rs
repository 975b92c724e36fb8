//! Durable-store error types.
//!
//! These errors cover the credential store: file I/O and the JSON
//! (de)serialization of the stored slot.

use std::fmt;

/// Persistence-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// The stored value could not be read.
    LoadFailed { message: String },

    /// The value could not be written.
    SaveFailed { message: String },

    /// The stored value could not be removed.
    ClearFailed { message: String },

    /// The stored value could not be encoded or decoded.
    Serialization { message: String },

    /// Underlying filesystem error.
    Io { message: String },
}

impl PersistenceError {
    /// Check if this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PersistenceError::SaveFailed { .. }
                | PersistenceError::ClearFailed { .. }
                | PersistenceError::Io { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PersistenceError::LoadFailed { .. } => {
                "Could not read your saved session.".to_string()
            }
            PersistenceError::SaveFailed { .. } => {
                "Could not save your session. Please check file permissions.".to_string()
            }
            PersistenceError::ClearFailed { .. } => {
                "Could not remove your saved session.".to_string()
            }
            PersistenceError::Serialization { .. } => {
                "Your saved session is in an unexpected format.".to_string()
            }
            PersistenceError::Io { message } => format!("Storage error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PersistenceError::LoadFailed { .. } => "PERSIST_LOAD",
            PersistenceError::SaveFailed { .. } => "PERSIST_SAVE",
            PersistenceError::ClearFailed { .. } => "PERSIST_CLEAR",
            PersistenceError::Serialization { .. } => "PERSIST_SERDE",
            PersistenceError::Io { .. } => "PERSIST_IO",
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::LoadFailed { message } => {
                write!(f, "Failed to load stored credentials: {}", message)
            }
            PersistenceError::SaveFailed { message } => {
                write!(f, "Failed to save credentials: {}", message)
            }
            PersistenceError::ClearFailed { message } => {
                write!(f, "Failed to clear credentials: {}", message)
            }
            PersistenceError::Serialization { message } => {
                write!(f, "Credential serialization error: {}", message)
            }
            PersistenceError::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for PersistenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let err = PersistenceError::SaveFailed {
            message: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_transient_classification() {
        assert!(PersistenceError::Io {
            message: "busy".to_string()
        }
        .is_transient());
        assert!(!PersistenceError::Serialization {
            message: "bad json".to_string()
        }
        .is_transient());
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            PersistenceError::LoadFailed {
                message: String::new()
            }
            .error_code(),
            "PERSIST_LOAD"
        );
        assert_eq!(
            PersistenceError::ClearFailed {
                message: String::new()
            }
            .error_code(),
            "PERSIST_CLEAR"
        );
    }
}
