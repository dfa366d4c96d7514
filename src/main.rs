//! Tic-tac-toe with time-travel - terminal frontend and CLI.

#![warn(missing_docs)]

mod cli;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ReplayFormat};
use tictactoe_time_travel::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&settings),
        Command::Replay { format, moves } => run_replay(&settings, format, &moves),
    }
}

/// Filter from `RUST_LOG`, falling back to the configured one.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Runs the interactive terminal game.
fn run_play(settings: &Settings) -> Result<()> {
    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tui::run(settings)
}

/// Replays moves headlessly and prints the result.
fn run_replay(settings: &Settings, format: ReplayFormat, moves: &[String]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");
    let report = replay::replay(moves);

    match format {
        ReplayFormat::Text => println!("{}", replay::render_text(&report, settings.show_hints())),
        ReplayFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize replay report")?
        ),
    }
    Ok(())
}
