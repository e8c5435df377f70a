//! Plain-text clipboard access.

use tracing::debug;

/// Port for reading the clipboard as plain text.
pub trait ClipboardText {
    /// Current clipboard text, or `None` when the clipboard holds no text
    /// or cannot be opened.
    fn read_text(&self) -> Option<String>;
}

/// System clipboard backed by `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardText for SystemClipboard {
    fn read_text(&self) -> Option<String> {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                debug!(error = %e, "clipboard unavailable for text read");
                return None;
            }
        };
        match clipboard.get_text() {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "clipboard has no text");
                None
            }
        }
    }
}

/// Clipboard text source that never has text.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoText;

impl ClipboardText for NoText {
    fn read_text(&self) -> Option<String> {
        None
    }
}
