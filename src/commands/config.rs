//! Config subcommands handler

use anyhow::Result;
use std::path::{Path, PathBuf};

use paste_image::Config;

use super::load_config;

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
///
/// Built-in templates are listed as comments so users can see what they
/// would override.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    println!("{}", toml::to_string_pretty(&config)?);
    println!("{}", builtin_templates_comment());
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(config_path)?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;

    // Ensure config exists
    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    eprintln!("Opening {} with {}", path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

/// Built-in per-language templates, rendered as TOML comments.
pub fn builtin_templates_comment() -> String {
    let defaults = Config::default();
    let mut out = String::from("# Built-in templates (override under [templates.link] / [templates.base64.<lang>])\n");
    for lang in ["markdown", "asciidoc", "<other>"] {
        let base64 = defaults.base64_template(lang);
        out.push_str(&format!(
            "# {}: link = {:?}, base64.inline = {:?}, base64.definition = {:?}\n",
            lang,
            defaults.link_template(lang),
            base64.inline,
            base64.definition
        ));
    }
    out
}
