//! Reader that turns the clipboard into a Base64 image payload.

use tracing::{debug, warn};

use super::base64::extract_image_base64;
use super::error::ClipboardError;
use super::text::{ClipboardText, SystemClipboard};
use super::tool::{CommandRunner, ImageTool, SystemRunner};
use super::tools::platform_tool;

/// Reads a Base64 image from clipboard text or the platform helper.
///
/// Order:
/// 1. Clipboard text, when it is Base64 that decodes to an image
/// 2. The platform helper script
pub struct ClipboardReader {
    text: Box<dyn ClipboardText>,
    tool: Box<dyn ImageTool>,
    runner: Box<dyn CommandRunner>,
}

impl ClipboardReader {
    /// Create with the system clipboard and the platform helper.
    pub fn new() -> Self {
        Self {
            text: Box::new(SystemClipboard),
            tool: platform_tool(),
            runner: Box::new(SystemRunner),
        }
    }

    /// Create with specific sources (for testing).
    pub fn with_sources(
        text: Box<dyn ClipboardText>,
        tool: Box<dyn ImageTool>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self { text, tool, runner }
    }

    /// Name of the helper this reader falls back to.
    pub fn tool_name(&self) -> &'static str {
        self.tool.name()
    }

    /// Return the clipboard image as Base64.
    ///
    /// # Errors
    /// - `ClipboardError::ClipboardEmpty` - no image on the clipboard
    /// - `ClipboardError::ToolNotInstalled` - the helper's dependency is missing
    /// - `ClipboardError::ExecutionFailed` - the helper failed to run
    pub fn read_base64_image(&self) -> Result<String, ClipboardError> {
        if let Some(text) = self.text.read_text() {
            if let Some(payload) = extract_image_base64(&text) {
                debug!(len = payload.len(), "using Base64 image from clipboard text");
                return Ok(payload);
            }
            debug!("clipboard text is not a Base64 image, trying helper");
        }

        self.tool.read_base64(self.runner.as_ref()).map_err(|e| {
            warn!(tool = self.tool.name(), error = %e, "clipboard helper failed");
            e
        })
    }
}

impl Default for ClipboardReader {
    fn default() -> Self {
        Self::new()
    }
}
