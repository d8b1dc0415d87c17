//! Move rejection reasons.

use crate::Position;

/// Why a move was rejected.
///
/// A rejected move never changes engine state. Drivers that only offer legal
/// moves can ignore the error and get silent no-op behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The computer has reserved this turn.
    #[display("Waiting for the computer to move")]
    ComputerTurnPending,
}

impl std::error::Error for MoveError {}
