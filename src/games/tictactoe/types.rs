//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark of the player who makes move number `ply` (1-based).
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 1 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Returns true if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values. Every snapshot stored in history is its
/// own grid, so writing to one never shows through in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Does not check occupancy; callers validate first.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[pos.row()][pos.col()] = Cell::Marked(mark);
        next
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Iterates over every position with its cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.iter().map(move |&pos| (pos, self.get(pos)))
    }

    /// Positions that are still empty.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| !cell.is_empty())
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-9 key when `hints` is set.
    pub fn display(&self, hints: bool) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Marked(mark) => mark.to_string(),
                    Cell::Empty if hints => (row * 3 + col + 1).to_string(),
                    Cell::Empty => " ".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let empty = Board::new();
        let next = empty.with_mark(Position::TopLeft, Mark::X);

        assert_eq!(empty.get(Position::TopLeft), Cell::Empty);
        assert_eq!(next.get(Position::TopLeft), Cell::Marked(Mark::X));
        // Rows are independent: marking row 0 must not show up in row 1 or 2
        assert_eq!(next.get(Position::MiddleLeft), Cell::Empty);
        assert_eq!(next.get(Position::BottomLeft), Cell::Empty);
    }

    #[test]
    fn test_get_at_bounds() {
        let board = Board::new();
        assert_eq!(board.get_at(2, 2), Some(Cell::Empty));
        assert_eq!(board.get_at(3, 0), None);
        assert_eq!(board.get_at(0, 3), None);
    }

    #[test]
    fn test_display_with_hints() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        assert_eq!(board.display(true), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
        assert_eq!(board.to_string(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }

    #[test]
    fn test_mark_for_ply() {
        assert_eq!(Mark::for_ply(1), Mark::X);
        assert_eq!(Mark::for_ply(2), Mark::O);
        assert_eq!(Mark::for_ply(9), Mark::X);
    }
}
