//! Credential store trait abstraction.
//!
//! The durable store holds exactly one opaque bearer token. The trait
//! exists so the session manager can be exercised against an in-memory
//! store in tests and against the file-backed store in production.

use async_trait::async_trait;

use crate::error::PersistenceError;

/// Trait for the durable single-slot token store.
///
/// Implementations include the production file-based storage
/// ([`crate::adapters::FileCredentialStore`]) and the in-memory mock
/// ([`crate::adapters::mock::InMemoryCredentialStore`]).
///
/// # Example
///
/// ```ignore
/// use moodify::traits::CredentialStore;
///
/// async fn restore_session<S: CredentialStore>(store: &S) {
///     match store.load().await {
///         Ok(Some(token)) => resume_with(token),
///         Ok(None) => show_login(),
///         Err(err) => {
///             tracing::warn!(code = err.error_code(), "credential load failed");
///             show_login()
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` if a token is stored
    /// - `Ok(None)` if the slot is empty (not an error)
    /// - `Err(error)` if the store could not be read
    async fn load(&self) -> Result<Option<String>, PersistenceError>;

    /// Save a token, replacing any previous value.
    async fn save(&self, token: &str) -> Result<(), PersistenceError>;

    /// Clear the stored token. Clearing an empty slot succeeds.
    async fn clear(&self) -> Result<(), PersistenceError>;
}
