//! CLI definitions for paste-image
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be reused for completions and tested without spawning the binary.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::editor::Position;

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "paste-image")]
#[command(about = "Paste clipboard images into text documents")]
#[command(
    long_about = "paste-image saves the image on your clipboard next to the document you
are editing and inserts a link to it, or embeds the image as Base64.

The clipboard may hold a real image or Base64 image text (optionally a
data: URI). Images are read with a small helper: PowerShell on Windows,
pngpaste on macOS, xclip on Linux.

QUICK START:
    paste-image paste --file notes.md --at 12:1      Save image, insert ![](...)
    paste-image paste-base64 --file notes.md         Embed image as Base64
    paste-image create ./assets                      Save image into a folder

Without --file the document is read from stdin and written to stdout."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use this config file instead of ~/.config/paste-image/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the document comes from and where the caret is.
#[derive(Args, Debug, Clone, Default)]
pub struct DocumentArgs {
    /// Document to edit; reads stdin and writes stdout when omitted
    #[arg(long, short, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Caret position as LINE[:COLUMN] (1-based); defaults to end of document
    #[arg(long, value_name = "LINE:COL")]
    pub at: Option<Position>,

    /// Extend the selection from --at to LINE[:COLUMN]
    #[arg(long, value_name = "LINE:COL", requires = "at")]
    pub to: Option<Position>,

    /// Language id for templates (default: from file extension)
    #[arg(long, short, value_name = "ID")]
    pub language: Option<String>,

    /// Workspace root for ${workspaceRoot} (default: nearest .git ancestor)
    #[arg(long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save the clipboard image and insert a link to it
    #[command(long_about = "Save the clipboard image to disk and insert a link at the caret.

The image goes into the folder configured by [paste].path (default: the
document's folder). The selected text, if any, becomes the file name;
otherwise a timestamp is used. The link format depends on the language:

    markdown    ![](img/2024-05-01-13-45-09.png)
    asciidoc    image::img/2024-05-01-13-45-09.png[]
    other       img/2024-05-01-13-45-09.png

EXAMPLES:
    paste-image paste --file README.md --at 10:1
    paste-image paste --file README.md --at 3:5 --to 3:12   Use selection as name")]
    Paste {
        #[command(flatten)]
        document: DocumentArgs,

        /// Skip the destination prompt even if [paste].confirm_path is set
        #[arg(long)]
        no_confirm: bool,
    },

    /// Embed the clipboard image as Base64 text
    #[command(long_about = "Embed the clipboard image in the document as Base64.

For markdown a reference goes at the caret and the data definition is
appended to the end of the document. No file is written, so this works
on unsaved (stdin) documents.

EXAMPLES:
    paste-image paste-base64 --file README.md --at 4:1
    cat draft.md | paste-image paste-base64 -l markdown > out.md")]
    PasteBase64 {
        #[command(flatten)]
        document: DocumentArgs,
    },

    /// Save the clipboard image into a folder
    #[command(long_about = "Save the clipboard image into a folder with a timestamp name.

If TARGET is a file, the image is saved next to it.

EXAMPLE:
    paste-image create docs/assets")]
    Create {
        /// Folder (or file whose folder) to save into
        #[arg(value_name = "TARGET")]
        target: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
}
