//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! loader/statistics modules used by the interactive session.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;
use std::io;
use std::path::Path;
use ui::prompt::Prompter;

/// Build the read-only configuration from the command line.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::default(),
    };

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    log::debug!("config: {cfg:?}");
    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ build config ONCE
    let cfg = load_config(&cli)?;

    // 3️⃣ interactive session on stdin/stdout
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    core::session::run_session(&mut prompter, &cfg)
}
