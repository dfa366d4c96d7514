//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// Every line that wins, in the order they are checked: rows top to
/// bottom, columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark that fills `line`, if all three cells match.
pub fn line_owner(board: &Board, line: &[Position; 3]) -> Option<Mark> {
    let [a, b, c] = *line;
    let mark = board.get(a).mark()?;
    (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark)).then_some(mark)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first complete line in [`LINES`] order,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn compute_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, mark)| board.with_mark(pos, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(compute_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(compute_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopCenter, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomCenter, Mark::O),
        ]);
        assert_eq!(compute_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(compute_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(compute_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(compute_winner(&board), None);
    }

    #[test]
    fn test_double_line_win() {
        // Top row and left column are both complete.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        assert_eq!(compute_winner(&board), Some(Mark::X));
        assert_eq!(LINES.iter().filter(|l| line_owner(&board, l).is_some()).count(), 2);
    }
}
