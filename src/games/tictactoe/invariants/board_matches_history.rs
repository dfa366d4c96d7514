//! Board/history agreement invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: the current board is the last history snapshot.
pub struct BoardMatchesHistoryInvariant;

impl Invariant<GameState> for BoardMatchesHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().snapshots().last() == Some(state.board())
    }

    fn description() -> &'static str {
        "Board equals the latest history snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, History, Mark, Position};

    #[test]
    fn test_holds_through_play_and_rewind() {
        let mut state = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomLeft] {
            state = state.with_move(pos).expect("legal move").0;
            assert!(BoardMatchesHistoryInvariant::holds(&state));
        }
        let state = state.rewound_to(1).expect("in range");
        assert!(BoardMatchesHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_stale_board_violates() {
        let (played, _) = GameState::new()
            .with_move(Position::Center)
            .expect("legal move");
        let state = GameState::from_parts(Board::new(), played.history().clone(), Mark::O);
        assert!(!BoardMatchesHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_violates() {
        let state = GameState::from_parts(Board::new(), History::from_snapshots(Vec::new()), Mark::X);
        assert!(!BoardMatchesHistoryInvariant::holds(&state));
    }
}
