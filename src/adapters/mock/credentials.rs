//! In-memory credential store for testing.
//!
//! Stores the token slot in memory so tests can exercise session and
//! cache behavior without file system access, and can inject storage
//! failures on any operation.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::PersistenceError;
use crate::traits::CredentialStore;

/// In-memory credential store for testing.
///
/// # Example
///
/// ```ignore
/// use moodify::adapters::mock::InMemoryCredentialStore;
/// use moodify::traits::CredentialStore;
///
/// let store = InMemoryCredentialStore::new();
/// assert!(store.load().await?.is_none());
///
/// store.save("test-token").await?;
/// assert_eq!(store.load().await?, Some("test-token".to_string()));
///
/// store.set_save_should_fail(true);
/// assert!(store.save("next-token").await.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryCredentialStore {
    /// Stored token slot
    token: Arc<Mutex<Option<String>>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
    /// Whether clear should fail
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryCredentialStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            token: Arc::new(Mutex::new(None)),
            save_should_fail: Arc::new(Mutex::new(false)),
            load_should_fail: Arc::new(Mutex::new(false)),
            clear_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a store with an initial token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set_token(Some(token.to_string()));
        store
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Get the current token synchronously (for assertions).
    pub fn get_token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// Set the token synchronously, bypassing the trait.
    ///
    /// This simulates an external actor writing the durable store behind
    /// the session manager's back (e.g. a password-reset flow).
    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Result<Option<String>, PersistenceError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(PersistenceError::LoadFailed {
                message: "Mock load failure".to_string(),
            });
        }

        Ok(self.token.lock().unwrap().clone())
    }

    async fn save(&self, token: &str) -> Result<(), PersistenceError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(PersistenceError::SaveFailed {
                message: "Mock save failure".to_string(),
            });
        }

        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), PersistenceError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(PersistenceError::ClearFailed {
                message: "Mock clear failure".to_string(),
            });
        }

        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
