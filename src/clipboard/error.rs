//! Clipboard read errors.

/// Errors that can occur while reading an image from the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("image of clipboard is empty")]
    ClipboardEmpty,

    #[error("You need to install {tool} command first.")]
    ToolNotInstalled { tool: &'static str },

    #[error("failed to save image of clipboard: {message}")]
    ExecutionFailed { message: String },
}

impl ClipboardError {
    pub(crate) fn failed(message: impl Into<String>) -> Self {
        ClipboardError::ExecutionFailed {
            message: message.into(),
        }
    }
}
