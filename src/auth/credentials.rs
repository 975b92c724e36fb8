//! Credential storage for the Moodify client.
//!
//! This module provides functionality for storing and loading the
//! access token from `~/.moodify/.credentials.json`.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

/// The credentials directory name.
const CREDENTIALS_DIR: &str = ".moodify";

/// The credentials file name.
const CREDENTIALS_FILE: &str = ".credentials.json";

/// The on-disk credential slot.
///
/// Only the opaque bearer token is stored locally. Profile, favorites
/// and history are always fetched from the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredCredentials {
    /// Bearer access token for API authentication.
    pub access_token: Option<String>,
}

impl StoredCredentials {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a token is present.
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Manages credential storage and retrieval.
#[derive(Debug)]
pub struct CredentialsManager {
    /// Path to the credentials file.
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Create a new CredentialsManager.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let credentials_path = home.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE);
        Some(Self { credentials_path })
    }

    /// Create a manager backed by an explicit file path.
    ///
    /// Used by tests and by hosts that keep app data somewhere other
    /// than the home directory.
    pub fn with_path(credentials_path: PathBuf) -> Self {
        Self { credentials_path }
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &PathBuf {
        &self.credentials_path
    }

    /// Load credentials from the credentials file.
    ///
    /// Returns an empty slot if the file doesn't exist or can't be read.
    pub fn load(&self) -> StoredCredentials {
        if !self.credentials_path.exists() {
            return StoredCredentials::default();
        }

        let file = match File::open(&self.credentials_path) {
            Ok(f) => f,
            Err(_) => return StoredCredentials::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(creds) => creds,
            Err(_) => StoredCredentials::default(),
        }
    }

    /// Save credentials to the credentials file.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns `true` if successful, `false` otherwise.
    pub fn save(&self, credentials: &StoredCredentials) -> bool {
        if let Some(parent) = self.credentials_path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let file = match File::create(&self.credentials_path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, credentials).is_err() {
            return false;
        }

        writer.flush().is_ok()
    }

    /// Clear all stored credentials.
    ///
    /// Removes the credentials file if it exists.
    /// Returns `true` if successful or file didn't exist, `false` otherwise.
    pub fn clear(&self) -> bool {
        if !self.credentials_path.exists() {
            return true;
        }

        fs::remove_file(&self.credentials_path).is_ok()
    }
}
