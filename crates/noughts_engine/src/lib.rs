//! Pure tic-tac-toe game engine.
//!
//! The engine owns the board, turn order, session scores and a heuristic
//! computer opponent. It has no rendering, timing or I/O: a front end drives
//! it through commands ([`GameEngine::play`], [`GameEngine::reset`],
//! [`GameEngine::new_game`], [`GameEngine::set_mode`]) and reads it back
//! through queries ([`GameEngine::status`], [`GameEngine::board`],
//! [`GameEngine::scores`]).
//!
//! ```
//! use noughts_engine::{GameEngine, GameStatus, Mark, Mode};
//!
//! let mut engine = GameEngine::with_seed(Mode::PlayerVsComputer, 7);
//! engine.play(0).unwrap();
//! assert!(engine.is_computer_turn_pending());
//!
//! // The driver decides when the computer moves.
//! let reply = engine.play_computer_turn().unwrap();
//! assert_eq!(reply.to_index(), 4);
//! assert_eq!(engine.status(), GameStatus::InProgress { current: Mark::X });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod heuristic;
mod position;
mod rng;
pub mod rules;
mod types;

pub use action::MoveError;
pub use engine::{GameEngine, Snapshot};
pub use heuristic::{Reason, choose_move, choose_move_with_reason};
pub use position::Position;
pub use rng::GameRng;
pub use rules::WINNING_LINES;
pub use types::{Board, BoardParseError, GameStatus, Line, Mark, Mode, Scores, Square};
