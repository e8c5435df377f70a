//! Command handlers for the paste-image CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod create;
pub mod paste;
pub mod paste_base64;

use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use paste_image::cli::DocumentArgs;
use paste_image::{Config, PasteError, TextDocument};

/// Load the config from `--config` or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Make a path absolute against the current directory.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Could not determine current directory")?;
        Ok(cwd.join(path))
    }
}

/// Open the document described by the CLI arguments.
///
/// Returns `None` when there is nothing to edit: no `--file` and stdin is
/// an interactive terminal.
pub fn open_document(args: &DocumentArgs) -> Result<Option<TextDocument>> {
    let mut document = match &args.file {
        Some(file) => {
            let path = absolute(file)?;
            TextDocument::open(&path)
                .with_context(|| format!("Failed to read document: {}", path.display()))?
        }
        None => {
            if atty::is(atty::Stream::Stdin) {
                return Ok(None);
            }
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            TextDocument::untitled(text, "plaintext")
        }
    };

    if let Some(language) = &args.language {
        document = document.with_language(language);
    }
    if let Some(at) = args.at {
        document.select(at, args.to);
    }
    Ok(Some(document))
}

/// Write the document back to its file, or to stdout when untitled.
///
/// Called on every outcome, failures included. A file is only rewritten
/// when it was edited; an untitled document is always echoed, unchanged
/// if the paste did not happen, so a stdin/stdout filter never loses text.
pub fn finish_document(document: Option<&TextDocument>, is_file: bool) -> Result<()> {
    let Some(document) = document else {
        return Ok(());
    };
    if is_file {
        document.save().context("Failed to save document")
    } else {
        print!("{}", document.text());
        io::stdout().flush().context("Failed to write document to stdout")
    }
}

/// Turn a paste error into the CLI result.
///
/// `NoActiveEditor` is a silent no-op; everything else is reported.
pub fn report(error: PasteError) -> Result<()> {
    if error.is_silent() {
        tracing::debug!("{}", error);
        return Ok(());
    }
    Err(error.into())
}
