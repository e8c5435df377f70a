//! Create command handler

use anyhow::Result;
use std::path::Path;

use paste_image::prompt::AutoConfirm;
use paste_image::{ClipboardReader, PasteOutcome, Paster};

use super::{absolute, load_config};

/// Save the clipboard image into a folder.
///
/// Prints the path of the new file on stdout so scripts can pick it up.
#[cfg(not(tarpaulin_include))]
pub fn handle(target: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let target = absolute(target)?;

    let clipboard = ClipboardReader::new();
    let paster = Paster::new(&config, &clipboard, &AutoConfirm);

    if let PasteOutcome::Created { path } = paster.create_image(&target, &chrono::Local::now())? {
        println!("{}", path.display());
    }
    Ok(())
}
