//! Tie detection logic for tic-tac-toe.

use super::super::Board;
use super::win::compute_winner;
use tracing::instrument;

/// Checks if the board is a tie: no winner and no empty cell left.
///
/// A board with empty cells is never a tie, even when neither player
/// can still complete a line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    compute_winner(board).is_none() && board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    fn fill(layout: [Mark; 9]) -> Board {
        Position::ALL
            .iter()
            .zip(layout)
            .fold(Board::new(), |board, (&pos, mark)| board.with_mark(pos, mark))
    }

    #[test]
    fn test_empty_board_not_tie() {
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_tie() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_tie_detection() {
        use Mark::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(board.is_full());
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_not_tie() {
        use Mark::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(board.is_full());
        assert!(!is_tie(&board));
    }
}
