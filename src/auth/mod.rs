//! Authentication support for the Moodify client.
//!
//! This module owns the durable credential slot; the in-memory session
//! built on top of it lives in [`crate::session`].

pub mod credentials;

pub use credentials::{CredentialsManager, StoredCredentials};
