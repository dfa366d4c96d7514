//! Command-line interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReplayFormat::Text)]
        format: ReplayFormat,

        /// Moves as zero-based `row,col` or cell numbers 1-9
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

/// Output format for `replay`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayFormat {
    /// Board drawing, status line, and move list
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}
