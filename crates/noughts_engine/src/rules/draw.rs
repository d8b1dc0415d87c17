//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a tie.
#[instrument(level = "trace")]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
