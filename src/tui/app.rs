//! Application state and key handling.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use tictactoe_time_travel::{GameEngine, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the time-travel list.
    History,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Stay,
    /// Leave the game.
    Quit,
}

/// Main application state.
///
/// Owns the engine; every key is translated into engine calls and the
/// screen is redrawn from the engine afterwards.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    /// Offset into the time-travel list.
    selected: usize,
    show_hints: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(show_hints: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_hints,
        }
    }

    /// History indices currently offered for time-travel.
    pub fn travel_list(&self) -> Vec<usize> {
        self.engine.travel_indices().collect()
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.engine.reset_game();
                self.focus = Focus::Board;
            }
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place_at_cursor();
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        self.clamp_selection();
        AppAction::Stay
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at_cursor(),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let count = self.travel_list().len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(count.saturating_sub(1)),
            KeyCode::Enter => {
                if let Some(&index) = self.travel_list().get(self.selected) {
                    self.engine.jump_to_move(index);
                    self.focus = Focus::Board;
                }
            }
            _ => {}
        }
    }

    fn place_at_cursor(&mut self) {
        debug!(cursor = %self.cursor, "Placing at cursor");
        self.engine.apply_move(self.cursor.row(), self.cursor.col());
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board if !self.travel_list().is_empty() => Focus::History,
            _ => Focus::Board,
        };
    }

    /// Keeps the list selection valid after history grows or shrinks.
    fn clamp_selection(&mut self) {
        let count = self.travel_list().len();
        if count == 0 {
            self.selected = 0;
            self.focus = Focus::Board;
        } else {
            self.selected = self.selected.min(count - 1);
        }
    }
}
