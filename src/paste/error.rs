//! Errors surfaced by paste operations.
//!
//! Every variant renders as a single line suitable for showing to the
//! user as-is.

use std::path::PathBuf;

use crate::clipboard::ClipboardError;

/// Error type for paste operations.
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    /// No document is open. Callers treat this as a silent no-op.
    #[error("No active document to paste into")]
    NoActiveEditor,

    #[error("Before pasting an image, you need to save the current edited file first.")]
    UnsavedDocument,

    #[error("Your selection is not a valid file name!")]
    InvalidFileName { selection: String },

    #[error("Invalid file name date pattern: {pattern:?}")]
    InvalidDatePattern { pattern: String },

    #[error("Target not found: {}", path.display())]
    TargetNotFound { path: PathBuf },

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Clipboard data is not valid Base64: {0}")]
    Base64DecodeInvalid(#[from] base64::DecodeError),

    #[error("Failed to save image to {}: {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PasteError {
    /// Whether the error should be reported to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, PasteError::NoActiveEditor)
    }
}
