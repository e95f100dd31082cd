//! Command-line interface for the tic-tac-toe frontend.

use clap::{Parser, Subcommand};
use timetravel_tictactoe::OutputFormat;

/// Time-travel tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with move history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Output format (text or json), overrides the config file
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// List moves latest first, overrides the config file
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Apply commands in order and print the final view
    Replay {
        /// Commands such as "play 4", "jump 0", "toggle"
        #[arg(required = true)]
        commands: Vec<String>,
    },
}
