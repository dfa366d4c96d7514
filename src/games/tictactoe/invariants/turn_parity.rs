//! Turn parity invariant: X moves after an even number of moves.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the player to move follows from the number of moves played.
///
/// Holds both during normal play, where the player toggles once per move,
/// and after time-travel, where it is reset from the target index.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(ply) = state.history().len().checked_sub(1) else {
            return false;
        };
        let expected = if ply % 2 == 0 { Mark::X } else { Mark::O };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Player to move alternates with history length (X after an even number of moves)"
    }
}
