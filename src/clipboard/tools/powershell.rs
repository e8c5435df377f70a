//! Windows PowerShell clipboard tool.

use crate::clipboard::tool::{ImageTool, ToolMethod};
use std::path::Path;

/// Reads the clipboard bitmap with System.Windows.Forms via PowerShell.
pub struct PowerShell;

impl PowerShell {
    pub const SCRIPT: &'static str = include_str!("../../../assets/scripts/win32.ps1");

    pub fn new() -> Self {
        Self
    }

    /// Arguments that run a script file without profile or window.
    ///
    /// `-sta` is required: the Forms clipboard API only works on a
    /// single-threaded apartment.
    pub fn build_args(script: &Path) -> Vec<String> {
        [
            "-noprofile",
            "-noninteractive",
            "-nologo",
            "-sta",
            "-executionpolicy",
            "unrestricted",
            "-windowstyle",
            "hidden",
            "-file",
        ]
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(script.display().to_string()))
        .collect()
    }
}

impl ImageTool for PowerShell {
    fn method(&self) -> ToolMethod {
        ToolMethod::PowerShell
    }

    fn script_name(&self) -> &'static str {
        "win32.ps1"
    }

    fn script_body(&self) -> &'static str {
        Self::SCRIPT
    }

    fn command(&self, script: &Path) -> (String, Vec<String>) {
        ("powershell".to_string(), Self::build_args(script))
    }

    fn missing_tool_sentinel(&self) -> Option<&'static str> {
        None
    }
}

impl Default for PowerShell {
    fn default() -> Self {
        Self::new()
    }
}
