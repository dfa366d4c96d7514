//! Headless replay of a move list.

use serde::Serialize;
use tictactoe_time_travel::{Board, GameEngine, Move, Position, Status};
use tracing::{instrument, warn};

/// Outcome of replaying a list of moves.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Board after the last accepted move.
    pub board: Board,
    /// Derived status of that board.
    pub status: Status,
    /// Moves the engine accepted, in order.
    pub moves: Vec<Move>,
    /// Every snapshot, starting with the empty board.
    pub history: Vec<Board>,
    /// Inputs that were ignored, with the reason.
    pub skipped: Vec<String>,
}

/// Feeds `inputs` to a fresh engine, skipping anything it refuses.
#[instrument(skip(inputs), fields(count = inputs.len()))]
pub fn replay(inputs: &[String]) -> ReplayReport {
    let mut engine = GameEngine::new();
    let mut skipped = Vec::new();

    for input in inputs {
        let Some(pos) = Position::parse(input) else {
            warn!(%input, "Not a board position");
            skipped.push(format!("{}: not a board position", input));
            continue;
        };
        if let Err(e) = engine.try_apply_move(pos) {
            warn!(%input, error = %e, "Move skipped");
            skipped.push(format!("{}: {}", input, e));
        }
    }

    ReplayReport {
        board: *engine.board(),
        status: engine.status(),
        moves: engine.moves(),
        history: engine.history().snapshots().to_vec(),
        skipped,
    }
}

/// Formats a report for the terminal.
pub fn render_text(report: &ReplayReport, hints: bool) -> String {
    let mut out = format!("{}\n\n{}\n", report.board.display(hints), report.status);
    for (i, action) in report.moves.iter().enumerate() {
        out.push_str(&format!("\nMove {}: {}", i + 1, action));
    }
    for line in &report.skipped {
        out.push_str(&format!("\nSkipped {}", line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_time_travel::Mark;

    fn inputs(moves: &[&str]) -> Vec<String> {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_replay_top_row_win() {
        let report = replay(&inputs(&["0,0", "1,1", "0,1", "2,2", "0,2"]));
        assert_eq!(report.status, Status::Winner(Mark::X));
        assert_eq!(report.moves.len(), 5);
        assert_eq!(report.history.len(), 6);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_replay_skips_refused_inputs() {
        let report = replay(&inputs(&["5", "5", "3,3", "center", "1"]));
        assert_eq!(report.moves.len(), 2);
        assert_eq!(report.skipped.len(), 3);
        assert_eq!(report.status, Status::NextTurn(Mark::X));
    }

    #[test]
    fn test_render_text() {
        let report = replay(&inputs(&["5"]));
        let text = render_text(&report, true);
        assert!(text.starts_with("1|2|3\n-+-+-\n4|X|6"));
        assert!(text.contains("Next Player: O"));
        assert!(text.contains("Move 1: X -> Center"));
    }
}
