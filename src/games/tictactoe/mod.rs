//! Tic-tac-toe with move history and time-travel.

mod action;
mod engine;
mod history;
mod invariants;
mod position;
mod rules;
mod state;
mod status;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use engine::GameEngine;
pub use history::History;
pub use invariants::{
    BoardMatchesHistoryInvariant, HistoryAnchoredInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicHistoryInvariant, TicTacToeInvariants, TurnParityInvariant,
};
pub use position::Position;
pub use rules::{compute_winner, is_tie, LINES};
pub use state::GameState;
pub use status::{derive_status, Status};
pub use types::{Board, Cell, Mark};
