//! Linux xclip clipboard tool.

use crate::clipboard::tool::{ImageTool, ToolMethod};
use std::path::Path;

/// Reads PNG data from the X11 clipboard through `xclip`.
pub struct Xclip;

impl Xclip {
    pub const SCRIPT: &'static str = include_str!("../../../assets/scripts/linux.sh");

    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }
}

impl ImageTool for Xclip {
    fn method(&self) -> ToolMethod {
        ToolMethod::Xclip
    }

    fn script_name(&self) -> &'static str {
        "linux.sh"
    }

    fn script_body(&self) -> &'static str {
        Self::SCRIPT
    }

    fn command(&self, script: &Path) -> (String, Vec<String>) {
        ("sh".to_string(), vec![script.display().to_string()])
    }

    fn missing_tool_sentinel(&self) -> Option<&'static str> {
        Some("no xclip")
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
