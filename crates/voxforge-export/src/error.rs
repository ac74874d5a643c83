//! Error types for exporting and importing.

use thiserror::Error;

/// Export and import error type.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Malformed or mistyped JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON describing an unusable asset.
    #[error("Invalid asset {asset:?}: {reason}")]
    InvalidAsset {
        /// Asset id or name.
        asset: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A model or color error surfaced while exporting.
    #[error(transparent)]
    Model(#[from] voxforge_core::Error),
}

impl ExportError {
    pub(crate) fn invalid(asset: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            asset: asset.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
