//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function and the report
//! workflow modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use utils::path::expand_tilde;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg).await,
        Commands::Upload { .. } => cli::commands::upload::handle(&cli.command, cfg).await,
        Commands::Daily { .. } => cli::commands::daily::handle(&cli.command, cfg).await,
        Commands::Monthly { .. } => cli::commands::monthly::handle(&cli.command, cfg).await,
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (file custom con --config)
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(&expand_tilde(path))?,
        None => Config::load()?,
    };

    // 3️⃣ override dell'endpoint da riga di comando
    if let Some(api) = &cli.api {
        cfg.api_base = api.clone();
    }

    logging::init_tracing(&cfg.log_level);

    // 4️⃣ una sola richiesta alla volta: runtime single-thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::from)?;

    runtime.block_on(dispatch(&cli, &cfg))
}
