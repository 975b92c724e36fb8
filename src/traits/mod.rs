//! Trait abstractions for dependency injection and testability.
//!
//! External collaborators are consumed only through these interfaces:
//!
//! - [`CredentialStore`] - durable single-slot bearer-token storage
//! - [`ImageSource`] - platform image capture/picker facility

pub mod credentials;
pub mod image_source;

pub use credentials::CredentialStore;
pub use image_source::{AssetReadError, CaptureOutcome, ImageAsset, ImageSource};
