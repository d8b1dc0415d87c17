//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// X always moves first after a reset.
    X,
    /// O moves second, and is the computer in player-vs-computer mode.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order. The engine only ever fills empty
/// squares, so a played square is never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark on a square. Callers check emptiness first.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.squares[pos.to_index()] = Square::Occupied(mark);
    }

    /// Returns a copy of the board with `mark` placed at `pos`.
    pub(crate) fn with_mark(mut self, pos: Position, mark: Mark) -> Self {
        self.place(pos, mark);
        self
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so a terminal player knows what
    /// to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
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

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a board literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character other than a mark or an empty marker.
    #[display("Unexpected character {:?} in board literal", _0)]
    UnexpectedChar(char),
    /// The literal did not describe exactly nine squares.
    #[display("Board literal has {} squares, expected 9", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses a row-major literal such as `"OO. XX. ..."`.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and `-` are empty squares.
    /// Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            squares.push(square);
        }
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// One of the eight winning lines, as three board positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The positions that make up the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The line as board indices (0-8).
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Game mode: who controls O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp", serialize = "player-vs-player")]
    PlayerVsPlayer,
    /// O is played by the computer.
    #[serde(rename = "pvc")]
    #[strum(to_string = "pvc", serialize = "player-vs-computer")]
    PlayerVsComputer,
}

impl Mode {
    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::PlayerVsPlayer => Mode::PlayerVsComputer,
            Mode::PlayerVsComputer => Mode::PlayerVsPlayer,
        }
    }

    /// Whether the computer controls `mark` in this mode.
    pub fn is_computer(self, mark: Mark) -> bool {
        self == Mode::PlayerVsComputer && mark == Mark::O
    }

    /// Display name of the player holding `mark`.
    pub fn player_name(self, mark: Mark) -> &'static str {
        match (self, mark) {
            (_, Mark::X) => "Player X",
            (Mode::PlayerVsPlayer, Mark::O) => "Player O",
            (Mode::PlayerVsComputer, Mark::O) => "Computer",
        }
    }

    /// Short label for menus and status lines.
    pub fn label(self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "Player vs Player",
            Mode::PlayerVsComputer => "Player vs Computer",
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Mark to move next.
        current: Mark,
    },
    /// Game ended in a win.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The first completed line in the fixed enumeration order.
        line: Line,
    },
    /// Board is full and nobody completed a line.
    Tied,
}

impl GameStatus {
    /// Whether the game has finished.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// Win counts per mark for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    /// Win count for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub(crate) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }
}
