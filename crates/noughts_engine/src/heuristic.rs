//! Rule-ordered move selection for the computer opponent.
//!
//! This is deliberately not a search. The rules run in a fixed priority
//! order against the current board:
//!
//! 1. take a square that wins immediately (lowest index first);
//! 2. block a square where the opponent would win (lowest index first);
//! 3. take the center;
//! 4. take a random empty corner;
//! 5. take any random empty square.
//!
//! A double threat (fork) beats it. That weakness is part of the game's
//! character and is kept as is.

use crate::rules::check_winner;
use crate::{Board, GameRng, Mark, Position};
use tracing::{debug, instrument};

/// Which rule produced a heuristic move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Reason {
    /// Completes a line for the mover.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Center square.
    Center,
    /// Random empty corner.
    Corner,
    /// Random empty square.
    Fallback,
}

/// Picks a move for `mark`, or `None` if the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn choose_move(board: &Board, mark: Mark, rng: &mut GameRng) -> Option<Position> {
    choose_move_with_reason(board, mark, rng).map(|(pos, _)| pos)
}

/// Same as [`choose_move`], also reporting which rule fired.
pub fn choose_move_with_reason(
    board: &Board,
    mark: Mark,
    rng: &mut GameRng,
) -> Option<(Position, Reason)> {
    let empty = Position::valid_moves(board);
    if empty.is_empty() {
        return None;
    }

    let choice = if let Some(pos) = completing_square(board, mark) {
        (pos, Reason::Win)
    } else if let Some(pos) = completing_square(board, mark.opponent()) {
        (pos, Reason::Block)
    } else if board.is_empty(Position::Center) {
        (Position::Center, Reason::Center)
    } else {
        let corners: Vec<Position> = Position::CORNERS
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        match rng.choose(&corners) {
            Some(pos) => (*pos, Reason::Corner),
            None => (*rng.choose(&empty)?, Reason::Fallback),
        }
    };

    debug!(?mark, position = ?choice.0, reason = %choice.1, "Heuristic chose move");
    Some(choice)
}

/// First empty square (ascending index) where `mark` would complete a line.
fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .find(|pos| check_winner(&board.with_mark(*pos, mark)) == Some(mark))
}
