//! Tic-tac-toe game engine with time-travel.
//!
//! The engine owns the single [`GameState`] and is the only thing that
//! replaces it. Input the view forwards is never an error from the view's
//! point of view: a refused move or jump leaves the state as it was.

use super::action::{JumpError, Move, MoveError};
use super::history::History;
use super::state::GameState;
use super::status::Status;
use super::types::{Board, Mark};
use super::Position;
use std::ops::RangeInclusive;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        self.state.history()
    }

    /// Returns the mark of the player to move.
    pub fn current_player(&self) -> Mark {
        self.state.current_player()
    }

    /// Returns the derived status: winner, tie, or whose turn it is.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// History indices offered for time-travel.
    pub fn travel_indices(&self) -> RangeInclusive<usize> {
        self.state.history().travel_indices()
    }

    /// Moves that led to the current board, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        self.state.history().moves()
    }

    /// Places the active player's mark at `(row, col)`.
    ///
    /// Off-board coordinates, occupied cells, and moves after a win are
    /// ignored.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) {
        let result = Position::from_row_col(row, col)
            .ok_or(MoveError::OutOfBounds { row, col })
            .and_then(|pos| self.try_apply_move(pos));
        if let Err(e) = result {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the active player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was refused; the state is unchanged.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn try_apply_move(&mut self, pos: Position) -> Result<Move, MoveError> {
        let (next, action) = self.state.with_move(pos)?;
        self.state = next;
        info!(%action, status = %self.state.status(), "Move applied");
        Ok(action)
    }

    /// Returns to the board after move `index`, discarding later moves.
    ///
    /// Out-of-range indices are ignored.
    #[instrument(skip(self))]
    pub fn jump_to_move(&mut self, index: usize) {
        if let Err(e) = self.try_jump_to_move(index) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Returns to the board after move `index`, discarding later moves.
    ///
    /// # Errors
    ///
    /// Returns the reason the jump was refused; the state is unchanged.
    #[instrument(skip(self))]
    pub fn try_jump_to_move(&mut self, index: usize) -> Result<(), JumpError> {
        let next = self.state.rewound_to(index)?;
        let dropped = self.state.history().len() - next.history().len();
        self.state = next;
        info!(index, dropped, player = %self.state.current_player(), "Jumped to move");
        Ok(())
    }

    /// Starts over: empty board, single-entry history, X to move.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.state = GameState::new();
        info!("Game reset");
    }
}
