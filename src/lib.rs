//! presencelog library root.
//! Exposes the CLI parser, the high-level run() function, and the internal modules.

pub mod archive;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Checkin { .. } => cli::commands::checkin::handle(&cli.command, cfg),
        Commands::ListCheckins => cli::commands::list::handle(cfg),
        Commands::Balance { .. } => cli::commands::balance::handle(&cli.command, cfg),
        Commands::Deposit => cli::commands::deposit::handle(cfg),
        Commands::ResetPresence => cli::commands::reset::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Rebase every data path when the user asked for a custom data dir
    // (useful for tests or side-by-side communities).
    if let Some(dir) = &cli.data_dir {
        cfg.rebase(dir);
    }

    dispatch(&cli, &cfg)
}
