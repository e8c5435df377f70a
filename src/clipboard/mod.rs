//! Clipboard image capture.
//!
//! This module reads an image from the system clipboard as Base64 text.
//! Clipboard text that already holds a Base64 image (raw or as a data URI)
//! is used directly. Otherwise a small platform helper script is run:
//! PowerShell on Windows, `pngpaste` on macOS, `xclip` elsewhere.
//!
//! # Example
//!
//! ```ignore
//! use paste_image::clipboard::ClipboardReader;
//!
//! let base64 = ClipboardReader::new().read_base64_image()?;
//! ```

pub mod base64;
mod error;
pub mod reader;
pub mod text;
pub mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use reader::ClipboardReader;
pub use text::{ClipboardText, SystemClipboard};
pub use tool::{CommandRunner, ImageTool, ScriptOutput, SystemRunner, ToolMethod};
