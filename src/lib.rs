//! rTimecard library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Fetch { .. } => cli::commands::fetch::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Profiles { .. } => cli::commands::profiles::handle(&cli.command, cfg),
    }
}

/// `RTIMECARD_LOG` wins over the verbosity flags.
fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("RTIMECARD_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    // a second init (tests driving run() twice) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    // 2️⃣ load config once: file, then .env / environment
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ command-line overrides
    if let Some(dir) = &cli.output_dir {
        cfg.output_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
