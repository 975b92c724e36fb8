//! File-based credential store adapter.
//!
//! This module provides a [`CredentialStore`] implementation that uses
//! the [`CredentialsManager`] for file-based storage.

use async_trait::async_trait;

use crate::auth::credentials::{CredentialsManager, StoredCredentials};
use crate::error::PersistenceError;
use crate::traits::CredentialStore;

/// File-based credential store.
///
/// Wraps [`CredentialsManager`] and implements [`CredentialStore`],
/// storing the token in `~/.moodify/.credentials.json`.
///
/// # Example
///
/// ```ignore
/// use moodify::adapters::FileCredentialStore;
/// use moodify::traits::CredentialStore;
///
/// let store = FileCredentialStore::new()?;
/// if let Some(token) = store.load().await? {
///     println!("Resuming session");
/// }
/// ```
#[derive(Debug)]
pub struct FileCredentialStore {
    manager: CredentialsManager,
}

impl FileCredentialStore {
    /// Create a new file-based credential store.
    ///
    /// # Returns
    /// The store, or an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PersistenceError> {
        CredentialsManager::new()
            .map(|manager| Self { manager })
            .ok_or_else(|| PersistenceError::Io {
                message: "Failed to determine home directory".to_string(),
            })
    }

    /// Create a store backed by an explicit manager.
    pub fn with_manager(manager: CredentialsManager) -> Self {
        Self { manager }
    }

    /// Get a reference to the underlying credentials manager.
    pub fn manager(&self) -> &CredentialsManager {
        &self.manager
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<String>, PersistenceError> {
        // CredentialsManager::load() returns an empty slot when the file
        // is missing or unreadable.
        Ok(self.manager.load().access_token)
    }

    async fn save(&self, token: &str) -> Result<(), PersistenceError> {
        let creds = StoredCredentials {
            access_token: Some(token.to_string()),
        };
        if self.manager.save(&creds) {
            Ok(())
        } else {
            Err(PersistenceError::SaveFailed {
                message: "Failed to write credentials file".to_string(),
            })
        }
    }

    async fn clear(&self) -> Result<(), PersistenceError> {
        if self.manager.clear() {
            Ok(())
        } else {
            Err(PersistenceError::ClearFailed {
                message: "Failed to delete credentials file".to_string(),
            })
        }
    }
}
