//! Platform helper implementations.

mod pngpaste;
mod powershell;
mod xclip;

pub use pngpaste::PngPaste;
pub use powershell::PowerShell;
pub use xclip::Xclip;

use super::tool::ImageTool;

/// Pick the helper for an OS name as reported by `std::env::consts::OS`.
///
/// Unknown platforms get the xclip helper, which covers the BSDs and
/// other X11 desktops.
pub fn tool_for_os(os: &str) -> Box<dyn ImageTool> {
    match os {
        "windows" => Box::new(PowerShell::new()),
        "macos" => Box::new(PngPaste::new()),
        _ => Box::new(Xclip::new()),
    }
}

/// Helper for the platform this binary runs on.
pub fn platform_tool() -> Box<dyn ImageTool> {
    tool_for_os(std::env::consts::OS)
}
