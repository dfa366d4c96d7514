//! Game state and its transitions.
//!
//! Every transition builds a complete next [`GameState`] from the current
//! one. Callers swap the whole value in, so board, history, and active
//! player always change together.

use super::action::{JumpError, Move, MoveError};
use super::history::History;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::compute_winner;
use super::status::{derive_status, Status};
use super::types::{Board, Mark};
use super::Position;
use serde::Serialize;
use tracing::{instrument, warn};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board on screen; always the latest history snapshot.
    board: Board,
    /// Every board since the start, oldest first.
    history: History,
    /// Mark of the player to move.
    current_player: Mark,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: History::new(),
            current_player: Mark::X,
        }
    }

    /// Builds a state from raw parts without checking anything.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, history: History, current_player: Mark) -> Self {
        Self {
            board,
            history,
            current_player,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the mark of the player to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the derived status.
    pub fn status(&self) -> Status {
        derive_status(self)
    }

    /// Returns the state after the active player marks `pos`.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the board already has a winner
    /// - `CellOccupied` if `pos` holds a mark
    /// - `InvariantViolation` (debug builds) if the result is inconsistent
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn with_move(&self, pos: Position) -> Result<(Self, Move), MoveError> {
        if let Some(winner) = compute_winner(&self.board) {
            return Err(MoveError::GameOver(winner));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mark = self.current_player;
        let board = self.board.with_mark(pos, mark);
        let next = Self {
            board,
            history: self.history.pushed(board),
            current_player: mark.opponent(),
        };

        if cfg!(debug_assertions) {
            next.verify().map_err(MoveError::InvariantViolation)?;
        }

        Ok((next, Move::new(mark, pos)))
    }

    /// Returns the state as it was after move `index`, dropping later moves.
    ///
    /// X moves next when `index` is even, O when odd.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `index` is not a history index
    /// - `InvariantViolation` (debug builds) if the result is inconsistent
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn rewound_to(&self, index: usize) -> Result<Self, JumpError> {
        let history = self.history.truncated(index).ok_or(JumpError::OutOfRange {
            index,
            len: self.history.len(),
        })?;
        let next = Self {
            board: *history.latest(),
            history,
            current_player: if index % 2 == 0 { Mark::X } else { Mark::O },
        };

        if cfg!(debug_assertions) {
            next.verify().map_err(JumpError::InvariantViolation)?;
        }

        Ok(next)
    }

    /// Checks every game invariant against this state.
    ///
    /// Returns the violated invariants joined into one description.
    fn verify(&self) -> Result<(), String> {
        TicTacToeInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Transition rejected");
            descriptions
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
