//! Data models for the Moodify backend wire shapes.
//!
//! The backend speaks camelCase JSON with a few nested envelopes
//! (`user.user`, `moodHistory.moodHistory`); the structs here mirror
//! those shapes with serde renames and defaults so a sparse payload
//! still decodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Avatar used when the backend has no photo for the user.
pub const DEFAULT_PROFILE_PHOTO: &str = "https://github.com/shadcn.png";

// ============================================================================
// User profile
// ============================================================================

/// The signed-in user's profile as the cache exposes it.
///
/// Every field is defaulted; the backend may omit any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    /// Photo reference, falling back to [`DEFAULT_PROFILE_PHOTO`].
    pub photo_url: String,
    pub phone: String,
    pub location: String,
}

/// User payload exactly as the dashboard endpoint sends it.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "profilePhoto")]
    pub profile_photo: Option<String>,
    #[serde(default, rename = "mobileNo")]
    pub mobile_no: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl RawUser {
    /// Fill the gaps the backend left and produce the profile the rest
    /// of the client works with.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            photo_url: self
                .profile_photo
                .unwrap_or_else(|| DEFAULT_PROFILE_PHOTO.to_string()),
            phone: self.mobile_no.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Playlists and favorites
// ============================================================================

/// A playlist reference as it appears in favorites and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
}

/// One favorited playlist with the mood it was saved under.
///
/// Favorites have set semantics keyed by `playlist.id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(rename = "moodTag")]
    pub mood_tag: String,
    pub playlist: Playlist,
}

/// Full playlist record returned by the history-detail endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaylistDetail {
    pub name: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tracks: u32,
    #[serde(default, rename = "externalUrl")]
    pub external_url: String,
    #[serde(default, rename = "embedUrl")]
    pub embed_url: String,
}

/// Envelope for the history-detail endpoint (`{ "playlist": {...} }`).
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistDetailResponse {
    pub playlist: PlaylistDetail,
}

// ============================================================================
// Mood history
// ============================================================================

/// A past mood analysis. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Dominant mood detected for this analysis.
    pub dominant: String,
    /// When the analysis ran; older records may not carry it.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, rename = "confidenceScore")]
    pub confidence_score: Option<f64>,
    #[serde(default, rename = "recommendedPlaylists")]
    pub recommended_playlists: Vec<Playlist>,
}

// ============================================================================
// Mood analysis
// ============================================================================

/// Playlist reference as the analyze endpoint returns it.
///
/// Unlike [`Playlist`], the analyze response uses a plain `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecommendedPlaylist {
    pub id: String,
    pub name: String,
}

/// Response of the analyze-emotion endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoodAnalysis {
    /// Dominant detected emotion.
    pub dominant: String,
    #[serde(rename = "recommendedMusicMood")]
    pub recommended_music_mood: String,
    #[serde(rename = "confidenceScore")]
    pub confidence_score: f64,
    /// Per-emotion confidence levels.
    #[serde(default)]
    pub emotions: HashMap<String, f64>,
    #[serde(default, rename = "recommendedPlaylists")]
    pub recommended_playlists: Vec<RecommendedPlaylist>,
}

// ============================================================================
// Dashboard envelope
// ============================================================================

/// Decode the dashboard `user` payload.
///
/// The backend nests the record one level down (`user.user`); older
/// builds sent it flat. Accept both; anything else decodes as missing.
fn deserialize_user_envelope<'de, D>(deserializer: D) -> Result<Option<RawUser>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Object(map)) => match map.get("user") {
            Some(serde_json::Value::Null) => None,
            Some(inner) => serde_json::from_value(inner.clone()).ok(),
            None => serde_json::from_value(serde_json::Value::Object(map)).ok(),
        },
        _ => None,
    })
}

/// Inner `moodHistory` envelope.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MoodHistoryEnvelope {
    #[serde(default, rename = "moodHistory")]
    pub mood_history: Vec<HistoryEntry>,
}

/// Response of the dashboard endpoint: everything the cache owns,
/// fetched in one round trip.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DashboardResponse {
    #[serde(default, deserialize_with = "deserialize_user_envelope")]
    pub user: Option<RawUser>,
    #[serde(default, rename = "favoritePlaylists")]
    pub favorite_playlists: Vec<FavoriteEntry>,
    #[serde(default, rename = "moodHistory")]
    pub mood_history: Option<MoodHistoryEnvelope>,
}

impl DashboardResponse {
    /// Extract the user record, if the payload carries one.
    pub fn into_parts(self) -> (Option<UserProfile>, Vec<FavoriteEntry>, Vec<HistoryEntry>) {
        let profile = self.user.map(RawUser::into_profile);
        let history = self
            .mood_history
            .map(|envelope| envelope.mood_history)
            .unwrap_or_default();
        (profile, self.favorite_playlists, history)
    }
}

// ============================================================================
// Auth responses
// ============================================================================

/// Response of login and forgot-password (`{ "accessToken": "..." }`).
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Generic `{ "message": "..." }` body used by signup/verify and by
/// error responses.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
