//! Session management: the in-memory authoritative token.
//!
//! [`SessionManager`] owns the current authentication token, initializes
//! it from the durable credential store on startup, mediates login and
//! logout, and publishes every change through a watch channel that
//! dependents subscribe to. The channel replaces the ambient
//! "token updated" broadcast the mobile app used: out-of-band writers
//! call [`SessionManager::notify_external_update`] and every subscriber
//! observes the re-read result.
//!
//! Ordering rules:
//! - `login` persists first and only then updates memory, so a token
//!   that is observable in memory always survives a restart.
//! - `logout` clears memory even when the durable clear fails, so the
//!   UI always reflects a logged-out state; the store is left for the
//!   next `initialize` to reconcile.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::PersistenceError;
use crate::traits::CredentialStore;

/// Owns the process-wide session token.
///
/// Constructed once at the application root and shared by reference;
/// screens read through [`token`](Self::token) or subscribe for changes.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use moodify::adapters::FileCredentialStore;
/// use moodify::session::SessionManager;
///
/// let store = Arc::new(FileCredentialStore::new()?);
/// let session = SessionManager::new(store);
/// session.initialize().await;
///
/// if !session.is_authenticated() {
///     show_login_screen();
/// }
/// ```
pub struct SessionManager {
    store: Arc<dyn CredentialStore>,
    token_tx: watch::Sender<Option<String>>,
}

impl SessionManager {
    /// Create a session with an empty token.
    ///
    /// Call [`initialize`](Self::initialize) before treating dependents
    /// as ready.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let (token_tx, _) = watch::channel(None);
        Self { store, token_tx }
    }

    /// Read the durable store once and adopt its token if present.
    ///
    /// Store failures are swallowed: the session simply starts logged
    /// out. Absence of a stored token is the normal first-run state,
    /// not an error.
    pub async fn initialize(&self) {
        match self.store.load().await {
            Ok(Some(token)) => {
                info!("session restored from credential store");
                self.token_tx.send_replace(Some(token));
            }
            Ok(None) => {
                debug!("no stored credentials; starting logged out");
            }
            Err(err) => {
                warn!(code = err.error_code(), "credential load failed; starting logged out");
            }
        }
    }

    /// Persist a token and adopt it in memory.
    ///
    /// The durable write happens first; if it fails the in-memory token
    /// is left untouched and the error is returned, so the session never
    /// exposes a token that would not survive a restart.
    pub async fn login(&self, token: &str) -> Result<(), PersistenceError> {
        self.store.save(token).await?;
        info!("login persisted; session token updated");
        self.token_tx.send_replace(Some(token.to_string()));
        Ok(())
    }

    /// Clear the durable store and the in-memory token.
    ///
    /// Memory is cleared even when the durable clear fails; in that case
    /// the error is returned and the stale stored token will resurface
    /// on the next [`initialize`](Self::initialize). Callers that cannot
    /// accept that may retry.
    pub async fn logout(&self) -> Result<(), PersistenceError> {
        let result = self.store.clear().await;
        if let Err(ref err) = result {
            warn!(code = err.error_code(), "durable clear failed during logout");
        }
        self.token_tx.send_replace(None);
        info!("session cleared");
        result
    }

    /// Re-read the durable store after an out-of-band write.
    ///
    /// Any flow that writes the store without going through
    /// [`login`](Self::login)/[`logout`](Self::logout) (password reset,
    /// forced re-login) must call this afterwards. The in-memory value
    /// is not assumed authoritative: whatever the store holds now is
    /// republished, and subscribers treat the notification as
    /// "re-authenticate, refetch" even when the token is unchanged.
    ///
    /// Read failures leave the current token in place.
    pub async fn notify_external_update(&self) {
        match self.store.load().await {
            Ok(token) => {
                info!(present = token.is_some(), "external credential update adopted");
                self.token_tx.send_replace(token);
            }
            Err(err) => {
                warn!(
                    code = err.error_code(),
                    "credential re-read failed; keeping current session"
                );
            }
        }
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token_tx.borrow().clone()
    }

    /// Whether a token is currently present.
    pub fn is_authenticated(&self) -> bool {
        self.token_tx.borrow().is_some()
    }

    /// Subscribe to token changes.
    ///
    /// The receiver yields the current value immediately and is notified
    /// on every login, logout, and external update, including updates
    /// that republish an identical token.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.token_tx.subscribe()
    }
}
