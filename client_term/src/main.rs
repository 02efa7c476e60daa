//! Ping n Pong! in the terminal
//!
//! Two players share one keyboard. The simulation lives in `game_core`; this
//! binary supplies the terminal, the keyboard and the real-time clock.

mod args;
mod draw;
mod input;
mod terminal;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{MatchController, SystemClock};
use tracing_subscriber::EnvFilter;

use args::Cli;
use terminal::TerminalPresentation;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    let mut game = MatchController::new(cli.config()).context("invalid game configuration")?;

    let mut presentation = TerminalPresentation::enter().context("failed to set up terminal")?;
    let mut clock = SystemClock::new();
    let outcome = game.run(&mut presentation, &mut clock);
    presentation.restore().context("failed to restore terminal")?;

    outcome.context("terminal I/O failed")
}

/// Log to a file; stdout belongs to the game
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
