//! Confirmation of the image destination before saving.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

/// Asks the user to confirm or edit the destination path.
pub trait Prompter {
    /// Return the path to save to, or `None` to cancel the paste.
    fn confirm_path(&self, default: &Path) -> Option<PathBuf>;
}

/// Accepts every proposed path unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Prompter for AutoConfirm {
    fn confirm_path(&self, default: &Path) -> Option<PathBuf> {
        Some(default.to_path_buf())
    }
}

/// Interactive prompt on the controlling terminal.
///
/// Empty input keeps the proposed path. If stdin is not a TTY the paste
/// is cancelled, since there is nobody to answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Interpret one line of user input against the proposed path.
    pub fn interpret(input: &str, default: &Path) -> Option<PathBuf> {
        let answer = input.trim();
        if answer.is_empty() {
            Some(default.to_path_buf())
        } else {
            Some(PathBuf::from(answer))
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm_path(&self, default: &Path) -> Option<PathBuf> {
        if !atty::is(atty::Stream::Stdin) {
            warn!("Non-interactive mode: pass --no-confirm to skip the path prompt");
            return None;
        }

        eprintln!("You can change the filename. The existing file will be overwritten!");
        eprint!("Save image to [{}]: ", default.display());
        io::stderr().flush().ok()?;

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            // EOF (Ctrl+D) cancels
            Ok(0) => None,
            Ok(_) => Self::interpret(&input, default),
            Err(e) => {
                warn!(error = %e, "failed to read path confirmation");
                None
            }
        }
    }
}
