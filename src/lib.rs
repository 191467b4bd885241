//! mealswipe library root.
//! Exposes the CLI parser, the high-level run() function, and the ledger,
//! key-value and history modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Config, TimeZoneSetting};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(&cli.command, cfg),
        Commands::Eat { .. } => cli::commands::eat::handle(&cli.command, cfg),
        Commands::Meal { .. } => cli::commands::meal::handle(&cli.command, cfg),
        Commands::Munch { .. } => cli::commands::munch::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Reconcile { .. } => cli::commands::reconcile::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);
    tracing::trace!("{cli:?}");

    // the config file is read once; command-line overrides win
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    if let Some(tz) = &cli.tz {
        cfg.timezone = tz.parse::<TimeZoneSetting>()?;
    }

    dispatch(&cli, &cfg)
}
