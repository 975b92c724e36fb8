//! Mock implementations for testing.
//!
//! Test doubles for the external collaborators:
//! - [`InMemoryCredentialStore`] - in-memory token slot with failure injection
//! - [`ScriptedImageSource`] - replays predefined picker outcomes

pub mod credentials;
pub mod image;

pub use credentials::InMemoryCredentialStore;
pub use image::ScriptedImageSource;
