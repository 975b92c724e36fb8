//! Image source trait abstraction.
//!
//! The platform image picker (camera or library) is consumed through
//! this port: it produces an image asset, reports a failure, or is
//! cancelled. Cancellation is a normal outcome, never an error.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// A locally selected image, ready to be uploaded for mood analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Local file reference produced by the picker.
    pub path: PathBuf,
    /// MIME type reported by the picker (e.g. `image/jpeg`).
    pub mime_type: String,
    /// Suggested upload filename.
    pub file_name: String,
}

impl ImageAsset {
    /// Create an asset with the default upload filename when the picker
    /// did not suggest one.
    pub fn new(path: PathBuf, mime_type: impl Into<String>, file_name: Option<String>) -> Self {
        Self {
            path,
            mime_type: mime_type.into(),
            file_name: file_name.unwrap_or_else(|| "photo.jpg".to_string()),
        }
    }

    /// Read the asset bytes for upload.
    pub async fn read(&self) -> Result<Vec<u8>, AssetReadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| AssetReadError {
                path: self.path.clone(),
                source,
            })
    }
}

/// The picked file could not be read back from disk.
#[derive(Debug, Error)]
#[error("failed to read image asset {path}: {source}")]
pub struct AssetReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Result of one interaction with the image picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The user dismissed the picker. Not an error; callers do nothing.
    Cancelled,
    /// The picker itself failed (permissions, hardware).
    Failed { message: String },
    /// The user selected or captured an image.
    Selected(ImageAsset),
}

impl CaptureOutcome {
    /// Get the selected asset, if any.
    pub fn asset(&self) -> Option<&ImageAsset> {
        match self {
            CaptureOutcome::Selected(asset) => Some(asset),
            _ => None,
        }
    }
}

/// Trait for the platform image capture/picker facility.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Open the picker and wait for the user.
    async fn pick(&self) -> CaptureOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_defaults_file_name() {
        let asset = ImageAsset::new(PathBuf::from("/tmp/img"), "image/png", None);
        assert_eq!(asset.file_name, "photo.jpg");

        let named = ImageAsset::new(
            PathBuf::from("/tmp/img"),
            "image/png",
            Some("selfie.png".to_string()),
        );
        assert_eq!(named.file_name, "selfie.png");
    }

    #[test]
    fn test_outcome_asset_accessor() {
        let asset = ImageAsset::new(PathBuf::from("/tmp/img"), "image/jpeg", None);
        assert!(CaptureOutcome::Selected(asset.clone()).asset().is_some());
        assert!(CaptureOutcome::Cancelled.asset().is_none());
        assert!(CaptureOutcome::Failed {
            message: "no camera".to_string()
        }
        .asset()
        .is_none());
    }

    #[tokio::test]
    async fn test_asset_read_missing_file() {
        let asset = ImageAsset::new(
            PathBuf::from("/nonexistent/moodify-test-img"),
            "image/jpeg",
            None,
        );
        let err = asset.read().await.unwrap_err();
        assert!(err.to_string().contains("moodify-test-img"));
    }
}
