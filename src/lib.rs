//! appviz library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
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
        Commands::Info => cli::commands::info::handle(&cli.command, cfg),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // apply data file override from the command line, if any
    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }

    dispatch(&cli, &cfg)
}
