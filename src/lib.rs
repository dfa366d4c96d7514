//! Tic-tac-toe with move history and time-travel.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns a single [`GameState`] (board, snapshot
//!   history, player to move) and replaces it whole on every transition
//! - **Rules**: pure functions over a board ([`compute_winner`], [`is_tie`])
//! - **Invariants**: first-class checks every transition must preserve
//! - **Settings**: optional TOML configuration for the terminal frontend
//!
//! # Example
//!
//! ```
//! use tictactoe_time_travel::{GameEngine, Mark, Status};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.apply_move(row, col);
//! }
//! assert_eq!(engine.status(), Status::Winner(Mark::X));
//!
//! engine.jump_to_move(0);
//! assert_eq!(engine.status(), Status::NextTurn(Mark::X));
//! assert_eq!(engine.history().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod settings;

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    compute_winner, derive_status, is_tie, Board, BoardMatchesHistoryInvariant, Cell, GameEngine,
    GameState, History, HistoryAnchoredInvariant, Invariant, InvariantSet, InvariantViolation,
    JumpError, Mark, MonotonicHistoryInvariant, Move, MoveError, Position, Status,
    TicTacToeInvariants, TurnParityInvariant, LINES,
};
