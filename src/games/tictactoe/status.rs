//! Derived game status.

use super::rules::{compute_winner, is_tie};
use super::state::GameState;
use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the view should announce for the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    Winner(Mark),
    /// Board is full with no line.
    Tie,
    /// Play continues with this mark.
    NextTurn(Mark),
}

impl Status {
    /// Returns true once the game has ended in a win or a tie.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextTurn(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Player {} Wins!", mark),
            Status::Tie => write!(f, "Tie - Play Again!"),
            Status::NextTurn(mark) => write!(f, "Next Player: {}", mark),
        }
    }
}

/// Derives the status of `state`: winner first, then tie, then next turn.
#[instrument(skip(state))]
pub fn derive_status(state: &GameState) -> Status {
    let board = state.board();
    if let Some(mark) = compute_winner(board) {
        Status::Winner(mark)
    } else if is_tie(board) {
        Status::Tie
    } else {
        Status::NextTurn(state.current_player())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::Winner(Mark::O).to_string(), "Player O Wins!");
        assert_eq!(Status::Tie.to_string(), "Tie - Play Again!");
        assert_eq!(Status::NextTurn(Mark::X).to_string(), "Next Player: X");
    }

    #[test]
    fn test_new_game_status() {
        let state = GameState::new();
        assert_eq!(derive_status(&state), Status::NextTurn(Mark::X));
        assert!(!derive_status(&state).is_over());
    }
}
