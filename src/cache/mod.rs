//! Session-scoped user data cache.
//!
//! [`UserDataCache`] owns the profile, favorites, and mood history
//! fetched from the backend. It subscribes to the session token and
//! keeps the cached data consistent with it:
//!
//! ```text
//!   token present ──▶ debounce ──▶ fetch dashboard ──▶ Ready
//!   token absent  ──────────────────────────────────▶ Idle (empty)
//!   fetch failure ──────────────────────────────────▶ Idle (empty)
//! ```
//!
//! The debounce window lets rapid credential writes settle before a
//! request is issued, so a token about to be superseded is not used.
//! Overlapping fetches are superseded, not coalesced: every trigger
//! bumps a generation counter and a completion that arrives for a stale
//! generation is dropped. Clearing also bumps the generation, so a late
//! response can never repopulate the cache after logout.
//!
//! The cache never persists or clears the token itself; the session
//! manager owns it exclusively.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::BackendClient;
use crate::error::ClientError;
use crate::models::{DashboardResponse, FavoriteEntry, HistoryEntry, UserProfile};

/// Delay between a token trigger and the dashboard fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Lifecycle of the cached data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheState {
    /// No token, or the last fetch failed. Data is empty.
    #[default]
    Idle,
    /// A fetch is scheduled or in flight.
    Loading,
    /// Data is populated, possibly stale.
    Ready,
}

/// Snapshot of everything the cache owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserData {
    pub profile: Option<UserProfile>,
    pub favorites: Vec<FavoriteEntry>,
    pub history: Vec<HistoryEntry>,
}

impl UserData {
    /// True when nothing is populated.
    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.favorites.is_empty() && self.history.is_empty()
    }
}

#[derive(Debug, Default)]
struct CacheInner {
    state: CacheState,
    data: UserData,
    /// Latest token observed on the session channel. Read-only
    /// dependency; only `refresh` uses it.
    token: Option<String>,
    /// Fetch generation. A completion only applies while its generation
    /// is still current.
    generation: u64,
}

/// Cache of session-scoped user data, kept consistent with the session
/// token.
///
/// Cheap to clone; clones share state. Construct once at the
/// application root, call [`spawn_sync`](Self::spawn_sync) with the
/// session's receiver, and hand clones to consumers.
///
/// # Example
///
/// ```ignore
/// use moodify::cache::UserDataCache;
///
/// let cache = UserDataCache::new(client);
/// let sync_task = cache.spawn_sync(session.subscribe());
///
/// // later, from a screen:
/// if let Some(profile) = cache.profile() {
///     render_header(&profile.username);
/// }
/// ```
#[derive(Clone)]
pub struct UserDataCache {
    inner: Arc<Mutex<CacheInner>>,
    client: BackendClient,
    debounce: Duration,
}

impl UserDataCache {
    /// Create a cache with the default debounce window.
    pub fn new(client: BackendClient) -> Self {
        Self::with_debounce(client, DEFAULT_DEBOUNCE)
    }

    /// Create a cache with a custom debounce window.
    pub fn with_debounce(client: BackendClient, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner::default())),
            client,
            debounce,
        }
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    /// Current lifecycle state.
    pub fn state(&self) -> CacheState {
        self.inner.lock().unwrap().state
    }

    /// Full snapshot of the cached data.
    pub fn snapshot(&self) -> UserData {
        self.inner.lock().unwrap().data.clone()
    }

    /// The cached profile, if populated.
    pub fn profile(&self) -> Option<UserProfile> {
        self.inner.lock().unwrap().data.profile.clone()
    }

    /// The cached favorites.
    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        self.inner.lock().unwrap().data.favorites.clone()
    }

    /// The cached mood history.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.inner.lock().unwrap().data.history.clone()
    }

    /// Whether a playlist is currently favorited.
    pub fn is_favorite(&self, playlist_id: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .data
            .favorites
            .iter()
            .any(|entry| entry.playlist.id == playlist_id)
    }

    // ------------------------------------------------------------------
    // Confirmed favorite mutations
    // ------------------------------------------------------------------

    /// Record a favorite the backend has acknowledged.
    ///
    /// Called by consumers after a successful
    /// [`BackendClient::add_favorite`], so the heart state flips without
    /// waiting for the next refetch. Set semantics: an entry for the
    /// same playlist id is replaced, never duplicated. No-op unless the
    /// cache is `Ready`.
    pub fn set_favorite(&self, entry: FavoriteEntry) {
        let mut inner = self.inner.lock().unwrap();
        if inner.state != CacheState::Ready {
            return;
        }
        inner
            .data
            .favorites
            .retain(|existing| existing.playlist.id != entry.playlist.id);
        inner.data.favorites.push(entry);
    }

    /// Drop a favorite the backend has acknowledged removing.
    ///
    /// Removing a playlist that is not favorited leaves the set
    /// unchanged (the backend delete is idempotent).
    pub fn remove_favorite(&self, playlist_id: &str) {
        let mut inner = self.inner.lock().unwrap();
        if inner.state != CacheState::Ready {
            return;
        }
        inner
            .data
            .favorites
            .retain(|existing| existing.playlist.id != playlist_id);
    }

    // ------------------------------------------------------------------
    // Fetch lifecycle
    // ------------------------------------------------------------------

    /// React to session token changes until the session is dropped.
    ///
    /// Spawns the reactor task: token present → debounce → fetch; token
    /// absent → clear. A change arriving during the debounce restarts
    /// the wait with the new value, so rapid writes collapse into one
    /// fetch.
    pub fn spawn_sync(&self, mut rx: watch::Receiver<Option<String>>) -> JoinHandle<()> {
        let cache = self.clone();
        tokio::spawn(async move {
            loop {
                let token = rx.borrow_and_update().clone();
                match token {
                    Some(token) => {
                        let generation = cache.begin_loading(Some(token.clone()));
                        tokio::select! {
                            changed = rx.changed() => {
                                if changed.is_err() {
                                    break;
                                }
                                // Superseded while debouncing; restart
                                // with the latest value.
                                continue;
                            }
                            _ = tokio::time::sleep(cache.debounce) => {}
                        }
                        cache.spawn_fetch(token, generation);
                    }
                    None => cache.clear(),
                }
                if rx.changed().await.is_err() {
                    break;
                }
            }
            debug!("session channel closed; cache sync task exiting");
        })
    }

    /// Explicitly refetch with the current token.
    ///
    /// Issued by consumers after flows the cache cannot observe (profile
    /// update). Skips the debounce; there is no credential write to wait
    /// out. Does nothing while logged out.
    pub fn refresh(&self) {
        let (token, generation) = {
            let mut inner = self.inner.lock().unwrap();
            let Some(token) = inner.token.clone() else {
                return;
            };
            inner.generation += 1;
            inner.state = CacheState::Loading;
            (token, inner.generation)
        };
        self.spawn_fetch(token, generation);
    }

    /// Enter `Loading` and claim a new fetch generation.
    fn begin_loading(&self, token: Option<String>) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.token = token;
        inner.generation += 1;
        inner.state = CacheState::Loading;
        debug!(generation = inner.generation, "cache loading");
        inner.generation
    }

    /// Drop all data and return to `Idle`.
    ///
    /// Bumps the generation so an in-flight fetch cannot repopulate the
    /// cache afterwards.
    fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.token = None;
        inner.generation += 1;
        inner.state = CacheState::Idle;
        inner.data = UserData::default();
        info!("user data cache cleared");
    }

    fn spawn_fetch(&self, token: String, generation: u64) {
        let cache = self.clone();
        tokio::spawn(async move {
            debug!(generation, "dashboard fetch started");
            let result = cache.client.fetch_dashboard(&token).await;
            cache.complete_fetch(generation, result);
        });
    }

    /// Apply a fetch completion, unless it was superseded.
    fn complete_fetch(&self, generation: u64, result: Result<DashboardResponse, ClientError>) {
        let mut inner = self.inner.lock().unwrap();
        if inner.generation != generation {
            debug!(
                generation,
                current = inner.generation,
                "dropping superseded fetch result"
            );
            return;
        }
        match result {
            Ok(response) => {
                let (profile, favorites, history) = response.into_parts();
                match profile {
                    Some(profile) => {
                        inner.state = CacheState::Ready;
                        inner.data = UserData {
                            profile: Some(profile),
                            favorites,
                            history,
                        };
                        info!(
                            favorites = inner.data.favorites.len(),
                            history = inner.data.history.len(),
                            "user data cache ready"
                        );
                    }
                    None => {
                        // A token the backend will not attach a user to
                        // is no valid session data.
                        inner.state = CacheState::Idle;
                        inner.data = UserData::default();
                        warn!("dashboard response carried no user; cache cleared");
                    }
                }
            }
            Err(err) => {
                // All fetch errors, auth included, clear the cache: an
                // empty profile over a stale one.
                inner.state = CacheState::Idle;
                inner.data = UserData::default();
                warn!(code = err.error_code(), "dashboard fetch failed; cache cleared");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Playlist;

    fn cache() -> UserDataCache {
        UserDataCache::with_debounce(
            BackendClient::with_base_url("http://127.0.0.1:1"),
            Duration::from_millis(1),
        )
    }

    fn favorite(id: &str, mood: &str) -> FavoriteEntry {
        FavoriteEntry {
            mood_tag: mood.to_string(),
            playlist: Playlist {
                id: id.to_string(),
                name: format!("Playlist {}", id),
                image_url: String::new(),
            },
        }
    }

    fn ready_response(username: &str) -> DashboardResponse {
        serde_json::from_str(&format!(
            r#"{{"user": {{"user": {{"username": "{}"}}}}, "favoritePlaylists": [], "moodHistory": {{"moodHistory": []}}}}"#,
            username
        ))
        .unwrap()
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let cache = cache();
        assert_eq!(cache.state(), CacheState::Idle);
        assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn test_complete_fetch_populates_ready() {
        let cache = cache();
        let generation = cache.begin_loading(Some("abc".to_string()));

        cache.complete_fetch(generation, Ok(ready_response("sam")));

        assert_eq!(cache.state(), CacheState::Ready);
        assert_eq!(cache.profile().unwrap().username, "sam");
    }

    #[test]
    fn test_superseded_completion_is_dropped() {
        let cache = cache();
        let stale = cache.begin_loading(Some("abc".to_string()));
        let current = cache.begin_loading(Some("abc".to_string()));

        cache.complete_fetch(stale, Ok(ready_response("stale")));
        assert_eq!(cache.state(), CacheState::Loading);

        cache.complete_fetch(current, Ok(ready_response("fresh")));
        assert_eq!(cache.profile().unwrap().username, "fresh");
    }

    #[test]
    fn test_completion_after_clear_is_dropped() {
        let cache = cache();
        let generation = cache.begin_loading(Some("abc".to_string()));
        cache.clear();

        cache.complete_fetch(generation, Ok(ready_response("sam")));

        assert_eq!(cache.state(), CacheState::Idle);
        assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn test_fetch_error_clears_to_idle() {
        let cache = cache();
        let generation = cache.begin_loading(Some("abc".to_string()));
        cache.complete_fetch(generation, Ok(ready_response("sam")));

        let generation = cache.begin_loading(Some("abc".to_string()));
        cache.complete_fetch(
            generation,
            Err(crate::error::AuthError::TokenRejected {
                message: "expired".to_string(),
            }
            .into()),
        );

        assert_eq!(cache.state(), CacheState::Idle);
        assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn test_response_without_user_clears_to_idle() {
        let cache = cache();
        let generation = cache.begin_loading(Some("abc".to_string()));

        cache.complete_fetch(generation, Ok(DashboardResponse::default()));

        assert_eq!(cache.state(), CacheState::Idle);
        assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn test_favorite_set_semantics() {
        let cache = cache();
        let generation = cache.begin_loading(Some("abc".to_string()));
        cache.complete_fetch(generation, Ok(ready_response("sam")));

        cache.set_favorite(favorite("p1", "joy"));
        cache.set_favorite(favorite("p1", "chill"));

        let favorites = cache.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].mood_tag, "chill");
    }

    #[test]
    fn test_favorite_toggle_round_trip() {
        let cache = cache();
        let generation = cache.begin_loading(Some("abc".to_string()));
        cache.complete_fetch(generation, Ok(ready_response("sam")));
        let original = cache.favorites();

        cache.set_favorite(favorite("p1", "joy"));
        assert!(cache.is_favorite("p1"));

        cache.remove_favorite("p1");
        assert!(!cache.is_favorite("p1"));
        assert_eq!(cache.favorites(), original);
    }

    #[test]
    fn test_remove_absent_favorite_is_noop() {
        let cache = cache();
        let generation = cache.begin_loading(Some("abc".to_string()));
        cache.complete_fetch(generation, Ok(ready_response("sam")));

        cache.remove_favorite("p1");
        assert!(!cache.is_favorite("p1"));
    }

    #[test]
    fn test_mutations_ignored_while_idle() {
        let cache = cache();
        cache.set_favorite(favorite("p1", "joy"));
        // No token, no data: the cache must stay empty.
        assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn test_refresh_without_token_is_noop() {
        let cache = cache();
        cache.refresh();
        assert_eq!(cache.state(), CacheState::Idle);
    }
}
