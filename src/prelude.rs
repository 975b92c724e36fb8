//! Prelude module for convenient imports.
//!
//! Re-exports the types most hosts need to wire up the client core.
//!
//! # Usage
//!
//! ```ignore
//! use moodify::prelude::*;
//! ```
//!
//! This will import:
//! - Session and cache (SessionManager, UserDataCache, CacheState)
//! - Backend client (BackendClient)
//! - Model types (UserProfile, FavoriteEntry, HistoryEntry, MoodAnalysis)
//! - History transform (HistoryRow, MoodFilter, flatten_history, filter_rows)
//! - Errors (ClientError, ErrorCategory)
//! - Configuration (ClientConfig)

// Session and cache
pub use crate::cache::{CacheState, UserData, UserDataCache};
pub use crate::session::SessionManager;

// Backend client
pub use crate::api::BackendClient;

// Model types
pub use crate::models::{
    DashboardResponse, FavoriteEntry, HistoryEntry, MoodAnalysis, Playlist, PlaylistDetail,
    UserProfile,
};

// History transform
pub use crate::history::{filter_rows, flatten_history, HistoryRow, MoodFilter};

// Errors
pub use crate::error::{ClientError, ErrorCategory};

// Configuration
pub use crate::config::ClientConfig;

// Ports and adapters
pub use crate::adapters::FileCredentialStore;
pub use crate::traits::{CaptureOutcome, CredentialStore, ImageAsset, ImageSource};
