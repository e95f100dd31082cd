//! Time-travel tic-tac-toe - terminal frontend
//!
//! Reads commands from stdin (or the command line) and prints the derived
//! view after each one. Logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use timetravel_tictactoe::{AppConfig, MoveOrder, Session};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }
    if cli.descending {
        config = config.with_order(MoveOrder::Descending);
    }

    initialize_tracing(config.log_filter().as_deref());
    info!(?config, "Configuration resolved");

    let mut session = Session::new(*config.order());

    match cli.command {
        Command::Play => {
            let stdin = io::stdin();
            timetravel_tictactoe::run(&mut session, &config, stdin.lock(), io::stdout())
        }
        Command::Replay { commands } => {
            timetravel_tictactoe::replay(&mut session, &config, &commands, io::stdout())
        }
    }
}

/// Logs to stderr. `RUST_LOG` wins over the config file's filter.
#[instrument]
fn initialize_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Tracing initialized");
}
