//! Paste command handler

use anyhow::Result;
use std::path::Path;

use paste_image::cli::DocumentArgs;
use paste_image::prompt::{AutoConfirm, Prompter, TerminalPrompter};
use paste_image::{ClipboardReader, Editor, PasteOutcome, Paster};

use super::{absolute, finish_document, load_config, open_document, report};

/// Save the clipboard image and insert a link into the document.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &DocumentArgs, no_confirm: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut document = open_document(args)?;
    let workspace = args.workspace.as_deref().map(absolute).transpose()?;

    let clipboard = ClipboardReader::new();
    let prompter: &dyn Prompter = if no_confirm {
        &AutoConfirm
    } else {
        &TerminalPrompter
    };
    let paster = Paster::new(&config, &clipboard, prompter).with_workspace_root(workspace);

    let editor = document.as_mut().map(|d| d as &mut dyn Editor);
    let result = paster.paste_image(editor, &chrono::Local::now());
    finish_document(document.as_ref(), args.file.is_some())?;

    match result {
        Ok(PasteOutcome::Saved { path, .. }) => {
            eprintln!("Saved image: {}", path.display());
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) => report(e),
    }
}
