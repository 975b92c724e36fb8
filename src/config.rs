//! Client configuration.
//!
//! Settings the application root decides once: where the backend lives
//! and how long the cache waits before fetching after a token change.

use std::time::Duration;

use crate::api::BACKEND_URL;
use crate::cache::DEFAULT_DEBOUNCE;

/// Environment variable overriding the backend base URL.
pub const BACKEND_URL_ENV: &str = "MOODIFY_API_URL";

/// Configuration for constructing the client core.
///
/// Use the builder methods to customize.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use moodify::config::ClientConfig;
///
/// let config = ClientConfig::from_env()
///     .with_debounce(Duration::from_millis(150));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL.
    pub base_url: String,
    /// Debounce window applied before dashboard fetches.
    pub debounce: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl ClientConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config honoring the `MOODIFY_API_URL` override.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Override the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the cache debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BACKEND_URL);
        assert_eq!(config.debounce, DEFAULT_DEBOUNCE);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_base_url("http://10.0.0.5:8080")
            .with_debounce(Duration::from_millis(50));
        assert_eq!(config.base_url, "http://10.0.0.5:8080");
        assert_eq!(config.debounce, Duration::from_millis(50));
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        std::env::set_var(BACKEND_URL_ENV, "http://staging:8080");
        let config = ClientConfig::from_env();
        std::env::remove_var(BACKEND_URL_ENV);
        assert_eq!(config.base_url, "http://staging:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_empty() {
        std::env::set_var(BACKEND_URL_ENV, "");
        let config = ClientConfig::from_env();
        std::env::remove_var(BACKEND_URL_ENV);
        assert_eq!(config.base_url, BACKEND_URL);
    }
}
