//! Save/insert orchestration.
//!
//! Each operation runs its steps in order and stops at the first error:
//!
//! 1. Check the editor state and the selection
//! 2. Resolve the destination (and confirm it, if configured)
//! 3. Read the clipboard
//! 4. Decode and write the image
//! 5. Render the snippet and edit the document
//!
//! A file that was already written is left in place when a later step
//! fails.

mod error;

pub use error::PasteError;

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, TimeZone};
use tracing::{debug, info};

use crate::clipboard::ClipboardReader;
use crate::config::Config;
use crate::editor::Editor;
use crate::files::filename;
use crate::files::resolve;
use crate::prompt::Prompter;
use crate::template::Replacements;

/// What a paste operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Image written to `path` and `snippet` inserted into the document.
    Saved { path: PathBuf, snippet: String },
    /// Image embedded as Base64 under the reference `name`.
    Embedded { name: String, inline: String },
    /// Image written to `path` with no document edit.
    Created { path: PathBuf },
    /// The user declined the destination prompt. Nothing was changed.
    Cancelled,
}

/// Runs the paste commands against a config, clipboard, and prompter.
pub struct Paster<'a> {
    config: &'a Config,
    clipboard: &'a ClipboardReader,
    prompter: &'a dyn Prompter,
    workspace_root: Option<PathBuf>,
}

impl<'a> Paster<'a> {
    pub fn new(
        config: &'a Config,
        clipboard: &'a ClipboardReader,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            config,
            clipboard,
            prompter,
            workspace_root: None,
        }
    }

    /// Use a fixed workspace root instead of searching for `.git`.
    pub fn with_workspace_root(mut self, root: Option<PathBuf>) -> Self {
        self.workspace_root = root;
        self
    }

    /// Save the clipboard image next to the document and insert a link.
    ///
    /// # Errors
    /// - `PasteError::NoActiveEditor` - no document is open
    /// - `PasteError::UnsavedDocument` - the document has no path yet
    /// - `PasteError::InvalidFileName` - the selection is not a valid name
    /// - `PasteError::Clipboard` - no image could be read
    /// - `PasteError::Base64DecodeInvalid` / `PasteError::FileWriteFailed`
    pub fn paste_image<Tz>(
        &self,
        editor: Option<&mut dyn Editor>,
        now: &DateTime<Tz>,
    ) -> Result<PasteOutcome, PasteError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let editor = editor.ok_or(PasteError::NoActiveEditor)?;
        let document = editor
            .document_path()
            .ok_or(PasteError::UnsavedDocument)?
            .to_path_buf();
        let selection = editor.selection_text().to_string();
        filename::validate_selection(&selection)?;

        let doc_dir = document.parent().unwrap_or_else(|| Path::new(""));
        let root = self.workspace_root_for(doc_dir);
        let mut vars = Replacements::for_document(&document, root.as_deref());

        let folder = resolve::save_directory(&document, &self.config.paste.path, &vars);
        let name = filename::image_file_name(&selection, &self.config.paste.default_name, now)?;
        let mut image_path = folder.join(vars.replace(&name));

        if self.config.paste.confirm_path {
            match self.prompter.confirm_path(&image_path) {
                Some(path) if path.is_absolute() => image_path = path,
                Some(path) => image_path = resolve::normalize(&doc_dir.join(path)),
                None => {
                    debug!("destination prompt cancelled");
                    return Ok(PasteOutcome::Cancelled);
                }
            }
        }

        let base64 = self.clipboard.read_base64_image()?;
        save_image(&image_path, &base64)?;
        info!(path = %image_path.display(), "saved image");

        vars.set(
            "relativePath",
            resolve::relative_path(doc_dir, &image_path),
        );
        let snippet = vars.replace(&self.config.link_template(editor.language_id()));
        editor.replace_selection(&snippet);

        Ok(PasteOutcome::Saved {
            path: image_path,
            snippet,
        })
    }

    /// Embed the clipboard image as Base64 text.
    ///
    /// The inline reference replaces the selection; the data definition,
    /// if the template has one, goes at the end of the document. Works on
    /// unsaved documents.
    pub fn paste_base64<Tz>(
        &self,
        editor: Option<&mut dyn Editor>,
        now: &DateTime<Tz>,
    ) -> Result<PasteOutcome, PasteError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let editor = editor.ok_or(PasteError::NoActiveEditor)?;
        let selection = editor.selection_text().to_string();
        let name = filename::image_file_name(&selection, &self.config.paste.default_name, now)?;

        let mut vars = match editor.document_path() {
            Some(document) => {
                let doc_dir = document.parent().unwrap_or_else(|| Path::new(""));
                let root = self.workspace_root_for(doc_dir);
                Replacements::for_document(document, root.as_deref())
            }
            None => Replacements::new(),
        };
        let name = vars.replace(&name);

        let base64 = self.clipboard.read_base64_image()?;
        STANDARD.decode(&base64)?;

        vars.set("relativePath", name.clone());
        vars.set("base64", base64);
        let (inline, definition) = self
            .config
            .base64_template(editor.language_id())
            .render(&vars);

        editor.replace_selection(&inline);
        if !definition.is_empty() {
            editor.append(&definition);
        }
        debug!(name = %name, "embedded Base64 image");

        Ok(PasteOutcome::Embedded { name, inline })
    }

    /// Save the clipboard image into a folder.
    ///
    /// When `target` is a file, its folder is used. The file name is
    /// always timestamp based.
    pub fn create_image<Tz>(
        &self,
        target: &Path,
        now: &DateTime<Tz>,
    ) -> Result<PasteOutcome, PasteError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        if !target.exists() {
            return Err(PasteError::TargetNotFound {
                path: target.to_path_buf(),
            });
        }

        let (folder, vars) = if target.is_dir() {
            let root = self.workspace_root_for(target);
            (
                target.to_path_buf(),
                Replacements::for_directory(target, root.as_deref()),
            )
        } else {
            let folder = target.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
            let root = self.workspace_root_for(&folder);
            (folder, Replacements::for_document(target, root.as_deref()))
        };

        let name = filename::image_file_name("", &self.config.paste.default_name, now)?;
        let image_path = folder.join(vars.replace(&name));

        let base64 = self.clipboard.read_base64_image()?;
        save_image(&image_path, &base64)?;
        info!(path = %image_path.display(), "saved image");

        Ok(PasteOutcome::Created { path: image_path })
    }

    fn workspace_root_for(&self, dir: &Path) -> Option<PathBuf> {
        self.workspace_root
            .clone()
            .or_else(|| resolve::find_workspace_root(dir))
    }
}

/// Decode a Base64 payload and write it, creating parent folders.
///
/// Existing files are overwritten.
pub fn save_image(path: &Path, base64: &str) -> Result<(), PasteError> {
    let bytes = STANDARD.decode(base64)?;
    let write_failed = |source: std::io::Error| PasteError::FileWriteFailed {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
    }
    fs::write(path, bytes).map_err(write_failed)?;
    Ok(())
}
