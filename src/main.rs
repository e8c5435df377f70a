//! paste-image - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use paste_image::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    paste_image::logging::init(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Paste {
            document,
            no_confirm,
        } => commands::paste::handle(&document, no_confirm, config),
        Commands::PasteBase64 { document } => commands::paste_base64::handle(&document, config),
        Commands::Create { target } => commands::create::handle(&target, config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config),
            ConfigCommands::Path => commands::config::handle_path(config),
            ConfigCommands::Edit => commands::config::handle_edit(config),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
