//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. They know nothing about history
//! or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{compute_winner, LINES};
