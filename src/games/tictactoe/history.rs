//! Board snapshot history.

use super::action::Move;
use super::types::{Board, Cell};
use super::Position;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Ordered board snapshots, oldest first.
///
/// Index 0 is always the empty board and the history is never empty.
/// Index `i` is the board after move `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Wraps raw snapshots without checking anything.
    #[cfg(test)]
    pub(crate) fn from_snapshots(snapshots: Vec<Board>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of moves played, i.e. the index of the latest snapshot.
    pub fn ply(&self) -> usize {
        self.len() - 1
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> &Board {
        // `snapshots` is never empty; every constructor seeds the empty board.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns a copy of this history with `board` appended.
    pub fn pushed(&self, board: Board) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.push(board);
        Self { snapshots }
    }

    /// Returns the prefix `[0..=index]`, or `None` when `index` is out of range.
    pub fn truncated(&self, index: usize) -> Option<Self> {
        (index < self.len()).then(|| Self {
            snapshots: self.snapshots[..=index].to_vec(),
        })
    }

    /// History indices offered for time-travel.
    ///
    /// Every index except the first (the empty board) and the latest
    /// (the board already on screen).
    pub fn travel_indices(&self) -> RangeInclusive<usize> {
        // Empty range (1..=0) until there are at least three snapshots.
        1..=self.len().saturating_sub(2)
    }

    /// Recovers the moves between consecutive snapshots.
    ///
    /// A pair that does not differ by exactly one newly marked cell is
    /// skipped.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| placed_between(&pair[0], &pair[1]))
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the single cell that went from empty to marked between two boards.
pub(crate) fn placed_between(before: &Board, after: &Board) -> Option<Move> {
    let mut changed = Position::ALL
        .iter()
        .filter(|&&pos| before.get(pos) != after.get(pos));
    let pos = *changed.next()?;
    if changed.next().is_some() {
        return None;
    }
    match (before.get(pos), after.get(pos)) {
        (Cell::Empty, Cell::Marked(mark)) => Some(Move::new(mark, pos)),
        _ => None,
    }
}
