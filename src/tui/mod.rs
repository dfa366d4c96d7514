//! Terminal frontend.
//!
//! Renders the engine's board, status, and time-travel list and turns key
//! presses into engine calls. Holds no game rules of its own.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tictactoe_time_travel::Settings;
use tracing::{error, info, instrument, warn};

use app::{App, AppAction};

/// Runs the interactive game until the player quits.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting terminal game");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let app = App::new(settings.show_hints());
    let res = run_app(&mut terminal, app);

    guard.restore().context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal game closed");

    res
}

/// Puts the terminal back into cooked mode when dropped.
///
/// Armed as soon as raw mode is on, so every early return after that
/// point still restores the terminal.
struct TerminalGuard {
    leave: fn() -> io::Result<()>,
    armed: bool,
}

impl TerminalGuard {
    fn new(leave: fn() -> io::Result<()>) -> Self {
        Self { leave, armed: true }
    }

    /// Enables raw mode and switches to the alternate screen.
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self::new(leave_terminal);
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Restores the terminal and disarms the guard.
    fn restore(mut self) -> io::Result<()> {
        self.armed = false;
        (self.leave)()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Restoring terminal after early exit");
        if let Err(e) = (self.leave)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn leave_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == AppAction::Quit {
                return Ok(());
            }
        }
    }
}
