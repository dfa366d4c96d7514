//! History anchor invariant: history starts from the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: history is never empty and index 0 is the empty board.
pub struct HistoryAnchoredInvariant;

impl Invariant<GameState> for HistoryAnchoredInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History is non-empty and starts from the empty board"
    }
}
