//! HTTP client for the Moodify backend.
//!
//! One method per endpoint: the auth surface (login/signup/verify/
//! forgot-password), the dashboard, favorites mutation, mood analysis
//! upload, and history detail. All authenticated calls carry
//! `Authorization: Bearer <token>`.
//!
//! Face/emotion inference and playlist recommendation happen entirely on
//! the backend; this client only moves requests and responses.

use reqwest::multipart;
use reqwest::Client;
use tracing::debug;

use crate::error::{classify_reqwest_error, AuthError, ClientError, NetworkError, ValidationError};
use crate::models::{
    AccessTokenResponse, DashboardResponse, MessageResponse, MoodAnalysis, PlaylistDetail,
    PlaylistDetailResponse,
};

/// Default backend URL for development builds.
pub const BACKEND_URL: &str = "http://localhost:8080";

/// Client for the Moodify backend API.
///
/// # Example
///
/// ```ignore
/// use moodify::api::BackendClient;
///
/// let client = BackendClient::with_base_url(server_url);
/// let token = client.login("sam@example.com", "secret123").await?;
/// let dashboard = client.fetch_dashboard(&token).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL for the backend.
    pub base_url: String,
    /// Reusable HTTP client.
    client: Client,
}

impl BackendClient {
    /// Create a client pointed at the default backend URL.
    pub fn new() -> Self {
        Self::with_base_url(BACKEND_URL.to_string())
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Create a client with a preconfigured `reqwest::Client`
    /// (custom timeouts, proxies).
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    // ------------------------------------------------------------------
    // Auth surface (no bearer token)
    // ------------------------------------------------------------------

    /// Log in with email and password.
    ///
    /// POST /api/users/mobile-login
    ///
    /// Returns the access token; callers hand it to
    /// [`crate::session::SessionManager::login`] so it is persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let url = format!("{}/api/users/mobile-login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| classify_reqwest_error("login", &e))?;

        let response = Self::check_auth_surface_status("login", response).await?;
        let body: AccessTokenResponse = response
            .json()
            .await
            .map_err(|e| classify_reqwest_error("login", &e))?;
        Ok(body.access_token)
    }

    /// Register a new account.
    ///
    /// POST /api/users/signup
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let url = format!("{}/api/users/signup", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .map_err(|e| classify_reqwest_error("signup", &e))?;

        Self::check_auth_surface_status("signup", response).await?;
        Ok(())
    }

    /// Confirm the emailed verification code.
    ///
    /// POST /api/users/verify
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<(), ClientError> {
        let url = format!("{}/api/users/verify", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "code": code }))
            .send()
            .await
            .map_err(|e| classify_reqwest_error("verify", &e))?;

        Self::check_auth_surface_status("verify", response).await?;
        Ok(())
    }

    /// Reset the password and get a fresh access token.
    ///
    /// POST /api/users/forgot-password
    ///
    /// The returned token replaces the stored one; flows that persist it
    /// outside [`crate::session::SessionManager::login`] must call
    /// `notify_external_update` afterwards so dependents refetch.
    pub async fn forgot_password(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<String, ClientError> {
        let url = format!("{}/api/users/forgot-password", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": new_password }))
            .send()
            .await
            .map_err(|e| classify_reqwest_error("forgot-password", &e))?;

        let response = Self::check_auth_surface_status("forgot-password", response).await?;
        let body: AccessTokenResponse = response
            .json()
            .await
            .map_err(|e| classify_reqwest_error("forgot-password", &e))?;
        Ok(body.access_token)
    }

    // ------------------------------------------------------------------
    // Authenticated surface
    // ------------------------------------------------------------------

    /// Fetch the full dashboard: profile, favorites, and mood history.
    ///
    /// GET /api/dashboard
    pub async fn fetch_dashboard(&self, token: &str) -> Result<DashboardResponse, ClientError> {
        let url = format!("{}/api/dashboard", self.base_url);
        debug!(url = %url, "fetching dashboard");
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| classify_reqwest_error("dashboard", &e))?;

        let response = Self::check_bearer_status("dashboard", response).await?;
        response
            .json()
            .await
            .map_err(|e| classify_reqwest_error("dashboard", &e).into())
    }

    /// Favorite a playlist under a mood tag.
    ///
    /// POST /api/favorites
    pub async fn add_favorite(
        &self,
        token: &str,
        playlist_id: &str,
        mood_tag: &str,
    ) -> Result<(), ClientError> {
        let url = format!("{}/api/favorites", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "playlistId": playlist_id, "moodTag": mood_tag }))
            .send()
            .await
            .map_err(|e| classify_reqwest_error("add favorite", &e))?;

        Self::check_bearer_status("add favorite", response).await?;
        Ok(())
    }

    /// Unfavorite a playlist. Deleting a playlist that is not currently
    /// favorited succeeds; the backend delete is idempotent.
    ///
    /// DELETE /api/favorites/{playlist_id}
    pub async fn remove_favorite(&self, token: &str, playlist_id: &str) -> Result<(), ClientError> {
        let url = format!("{}/api/favorites/{}", self.base_url, playlist_id);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| classify_reqwest_error("remove favorite", &e))?;

        Self::check_bearer_status("remove favorite", response).await?;
        Ok(())
    }

    /// Upload a photo for mood analysis.
    ///
    /// POST /api/analyze-emotion (multipart, field `image`)
    pub async fn analyze_mood(
        &self,
        token: &str,
        image: Vec<u8>,
        mime_type: &str,
        file_name: &str,
    ) -> Result<MoodAnalysis, ClientError> {
        let url = format!("{}/api/analyze-emotion", self.base_url);

        let part = multipart::Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|_| ValidationError::new("image", format!("Invalid MIME type: {}", mime_type)))?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| classify_reqwest_error("analyze", &e))?;

        let response = Self::check_bearer_status("analyze", response).await?;
        response
            .json()
            .await
            .map_err(|e| classify_reqwest_error("analyze", &e).into())
    }

    /// Fetch the detail record for a playlist from a past analysis.
    ///
    /// GET /api/history/{id}
    pub async fn history_detail(
        &self,
        token: &str,
        id: &str,
    ) -> Result<PlaylistDetail, ClientError> {
        let url = format!("{}/api/history/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| classify_reqwest_error("history detail", &e))?;

        let response = Self::check_bearer_status("history detail", response).await?;
        let body: PlaylistDetailResponse = response
            .json()
            .await
            .map_err(|e| classify_reqwest_error("history detail", &e))?;
        Ok(body.playlist)
    }

    // ------------------------------------------------------------------
    // Status mapping
    // ------------------------------------------------------------------

    /// Pull the backend's `{ "message": ... }` body out of an error
    /// response, falling back to the status reason.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        response
            .json::<MessageResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            })
    }

    /// Status mapping for the unauthenticated auth surface: client
    /// errors mean the submitted credentials were refused.
    async fn check_auth_surface_status(
        operation: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = Self::error_message(response).await;
        if status.is_client_error() {
            Err(AuthError::CredentialsRejected {
                status: status.as_u16(),
                message,
            }
            .into())
        } else {
            Err(NetworkError::HttpStatus {
                status: status.as_u16(),
                message: format!("{}: {}", operation, message),
            }
            .into())
        }
    }

    /// Status mapping for bearer-authenticated calls: 401 means the
    /// token is no longer valid.
    async fn check_bearer_status(
        operation: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = Self::error_message(response).await;
        if status.as_u16() == 401 {
            Err(AuthError::TokenRejected { message }.into())
        } else {
            Err(NetworkError::HttpStatus {
                status: status.as_u16(),
                message: format!("{}: {}", operation, message),
            }
            .into())
        }
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}
