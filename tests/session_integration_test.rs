//! Integration tests for the session lifecycle.
//!
//! These tests verify the token ordering guarantees:
//! 1. After a successful login, store and memory agree exactly
//! 2. Logout clears memory regardless of the durable outcome
//! 3. Startup restores a stored token and tolerates store failures
//! 4. External store writes are adopted on notification

use std::sync::Arc;

use moodify::adapters::mock::InMemoryCredentialStore;
use moodify::adapters::FileCredentialStore;
use moodify::auth::credentials::CredentialsManager;
use moodify::session::SessionManager;
use moodify::traits::CredentialStore;
use tempfile::TempDir;

fn session_over(store: &InMemoryCredentialStore) -> SessionManager {
    SessionManager::new(Arc::new(store.clone()))
}

#[tokio::test]
async fn test_login_round_trips_through_store_and_memory() {
    let store = InMemoryCredentialStore::new();
    let session = session_over(&store);

    session.login("abc").await.unwrap();

    // P1: both copies read back exactly the logged-in token.
    assert_eq!(store.get_token(), Some("abc".to_string()));
    assert_eq!(session.token(), Some("abc".to_string()));
}

#[tokio::test]
async fn test_failed_persist_aborts_login() {
    let store = InMemoryCredentialStore::new();
    store.set_save_should_fail(true);
    let session = session_over(&store);

    assert!(session.login("abc").await.is_err());

    // A token that cannot survive a restart must never become visible.
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_memory_when_store_clear_fails() {
    let store = InMemoryCredentialStore::new();
    let session = session_over(&store);
    session.login("abc").await.unwrap();

    store.set_clear_should_fail(true);
    let result = session.logout().await;

    // P2: memory reads empty regardless of the durable outcome.
    assert!(result.is_err());
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn test_logout_clears_both_copies_on_success() {
    let store = InMemoryCredentialStore::new();
    let session = session_over(&store);
    session.login("abc").await.unwrap();

    session.logout().await.unwrap();

    assert_eq!(store.get_token(), None);
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn test_restart_resurrects_token_after_failed_clear() {
    let store = InMemoryCredentialStore::new();
    let session = session_over(&store);
    session.login("abc").await.unwrap();

    store.set_clear_should_fail(true);
    let _ = session.logout().await;
    store.set_clear_should_fail(false);

    // Next process start reconciles from the store: the token the user
    // believed cleared comes back. Accepted limitation.
    let restarted = session_over(&store);
    restarted.initialize().await;
    assert_eq!(restarted.token(), Some("abc".to_string()));
}

#[tokio::test]
async fn test_initialize_with_empty_store_is_not_an_error() {
    let session = session_over(&InMemoryCredentialStore::new());
    session.initialize().await;
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_initialize_swallows_store_failure() {
    let store = InMemoryCredentialStore::new();
    store.set_load_should_fail(true);
    let session = session_over(&store);

    session.initialize().await;

    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_external_update_adopts_replacement_token() {
    let store = InMemoryCredentialStore::new();
    let session = session_over(&store);
    session.login("old").await.unwrap();

    // A password-reset flow persists a fresh token behind the session's
    // back, then signals.
    store.set_token(Some("new".to_string()));
    session.notify_external_update().await;

    assert_eq!(session.token(), Some("new".to_string()));
}

#[tokio::test]
async fn test_subscriber_sees_login_and_logout() {
    let store = InMemoryCredentialStore::new();
    let session = session_over(&store);
    let mut rx = session.subscribe();
    assert_eq!(*rx.borrow_and_update(), None);

    session.login("abc").await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), Some("abc".to_string()));

    session.logout().await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), None);
}

#[tokio::test]
async fn test_session_over_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".credentials.json");

    {
        let store = FileCredentialStore::with_manager(CredentialsManager::with_path(path.clone()));
        let session = SessionManager::new(Arc::new(store));
        session.login("abc").await.unwrap();
    }

    // A fresh session over the same file restores the token.
    let store = FileCredentialStore::with_manager(CredentialsManager::with_path(path));
    assert_eq!(store.load().await.unwrap(), Some("abc".to_string()));

    let session = SessionManager::new(Arc::new(store));
    session.initialize().await;
    assert_eq!(session.token(), Some("abc".to_string()));
}
