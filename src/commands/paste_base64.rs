//! Paste-base64 command handler

use anyhow::Result;
use std::path::Path;

use paste_image::cli::DocumentArgs;
use paste_image::prompt::AutoConfirm;
use paste_image::{ClipboardReader, Editor, PasteOutcome, Paster};

use super::{absolute, finish_document, load_config, open_document, report};

/// Embed the clipboard image in the document as Base64 text.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &DocumentArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut document = open_document(args)?;
    let workspace = args.workspace.as_deref().map(absolute).transpose()?;

    let clipboard = ClipboardReader::new();
    // Nothing is written to disk, so there is no path to confirm
    let paster = Paster::new(&config, &clipboard, &AutoConfirm).with_workspace_root(workspace);

    let editor = document.as_mut().map(|d| d as &mut dyn Editor);
    let result = paster.paste_base64(editor, &chrono::Local::now());
    finish_document(document.as_ref(), args.file.is_some())?;

    match result {
        Ok(PasteOutcome::Embedded { name, .. }) => {
            tracing::info!("Embedded image {}", name);
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) => report(e),
    }
}
