//! Win detection logic for tic-tac-toe.

use crate::{Board, Line, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Win detection reports the first complete line in this order.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    Line::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first line held entirely by one mark, with that mark.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
