//! paste-image library
//!
//! Reads an image (or Base64 image text) from the system clipboard, saves
//! it to disk, and inserts a language-appropriate reference into a text
//! document.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod files;
pub mod logging;
pub mod paste;
pub mod prompt;
pub mod template;

pub use clipboard::{ClipboardError, ClipboardReader};
pub use config::Config;
pub use editor::{Editor, Position, TextDocument};
pub use paste::{PasteError, PasteOutcome, Paster};
pub use template::Replacements;
