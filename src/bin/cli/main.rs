mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use app::App;

#[derive(Parser)]
#[command(name = "mneme-cli", about = "Markdown flashcards with spaced review", version)]
struct Cli {
    /// Vault directory containing markdown documents (default: current dir)
    #[arg(long, global = true)]
    vault: Option<PathBuf>,

    /// Override the data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rescan the vault and rebuild the card store
    Index {
        /// Suppress the summary output
        #[arg(long)]
        quiet: bool,
    },

    /// Start a review session
    Review {
        /// Review cards even when none are due
        #[arg(long)]
        force: bool,
    },

    /// List all cards with their review state
    Cards,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = App::new(cli.vault, cli.data_dir)?;

    match cli.command {
        Command::Index { quiet } => commands::index::run(&app, quiet),
        Command::Review { force } => commands::review::run(&app, force),
        Command::Cards => commands::cards::run(&app),
    }
}
