//! macOS pngpaste clipboard tool.

use crate::clipboard::tool::{ImageTool, ToolMethod};
use std::path::Path;

/// Reads the pasteboard image through the `pngpaste` utility.
///
/// `pngpaste` is not part of macOS; users install it with Homebrew.
pub struct PngPaste;

impl PngPaste {
    pub const SCRIPT: &'static str = include_str!("../../../assets/scripts/mac.sh");

    pub fn new() -> Self {
        Self
    }
}

impl ImageTool for PngPaste {
    fn method(&self) -> ToolMethod {
        ToolMethod::PngPaste
    }

    fn script_name(&self) -> &'static str {
        "mac.sh"
    }

    fn script_body(&self) -> &'static str {
        Self::SCRIPT
    }

    fn command(&self, script: &Path) -> (String, Vec<String>) {
        ("sh".to_string(), vec![script.display().to_string()])
    }

    fn missing_tool_sentinel(&self) -> Option<&'static str> {
        Some("no pngpaste")
    }
}

impl Default for PngPaste {
    fn default() -> Self {
        Self::new()
    }
}
