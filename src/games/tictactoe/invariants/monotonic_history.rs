//! Monotonic history invariant: cells are never overwritten.

use super::super::history::placed_between;
use super::super::rules::compute_winner;
use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: each snapshot adds exactly one mark to the previous one.
///
/// Snapshot `i` places the mark of move `i` (X on odd, O on even) into
/// a cell that was empty, and no snapshot follows a board that already
/// had a winner.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                compute_winner(&pair[0]).is_none()
                    && placed_between(&pair[0], &pair[1])
                        .is_some_and(|action| action.mark == Mark::for_ply(i + 1))
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark to an empty cell, alternating from X, until someone wins"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, History, Position};

    fn state_from(snapshots: Vec<Board>) -> GameState {
        let history = History::from_snapshots(snapshots);
        let board = *history.latest();
        let player = if history.ply() % 2 == 0 { Mark::X } else { Mark::O };
        GameState::from_parts(board, history, player)
    }

    #[test]
    fn test_played_game_holds() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            state = state.with_move(pos).expect("legal move").0;
        }
        assert!(MonotonicHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Mark::X);
        let overwritten = first.with_mark(Position::Center, Mark::O);
        let state = state_from(vec![Board::new(), first, overwritten]);
        assert!(!MonotonicHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with_mark(Position::Center, Mark::X);
        let second = first.with_mark(Position::TopLeft, Mark::X);
        let state = state_from(vec![Board::new(), first, second]);
        assert!(!MonotonicHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_move_after_win_violates() {
        let won = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .iter()
            .fold(Board::new(), |b, &p| b.with_mark(p, Mark::X))
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomLeft, Mark::O);
        let after = won.with_mark(Position::BottomRight, Mark::X);
        // Intermediate snapshots are not needed to show the win check.
        let state = state_from(vec![won, after]);
        assert!(!MonotonicHistoryInvariant::holds(&state));
    }
}
