//! The game engine: board, turns, scores and the computer opponent.

use crate::action::MoveError;
use crate::heuristic::choose_move;
use crate::rules::{is_full, winning_line};
use crate::{Board, GameRng, GameStatus, Mark, Mode, Position, Scores, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// A synchronous state machine with no rendering or timing. Commands take
/// `&mut self`; a rejected command leaves every field untouched.
///
/// In [`Mode::PlayerVsComputer`], a human move that hands the turn to O
/// reserves the turn for the computer. Until the driver calls
/// [`GameEngine::play_computer_turn`], [`GameEngine::play`] rejects input
/// with [`MoveError::ComputerTurnPending`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Mark,
    mode: Mode,
    status: GameStatus,
    scores: Scores,
    computer_pending: bool,
    history: Vec<Position>,
    rng: GameRng,
}

impl GameEngine {
    /// Creates an engine whose tie-breaks come from a fresh random seed.
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, GameRng::from_entropy())
    }

    /// Creates an engine with a fixed seed for reproducible computer play.
    pub fn with_seed(mode: Mode, seed: u64) -> Self {
        Self::with_rng(mode, GameRng::new(seed))
    }

    /// Creates an engine with the given random source.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn with_rng(mode: Mode, rng: GameRng) -> Self {
        debug!("Creating game engine");
        Self {
            board: Board::new(),
            current: Mark::X,
            mode,
            status: GameStatus::InProgress { current: Mark::X },
            scores: Scores::default(),
            computer_pending: false,
            history: Vec::new(),
            rng,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the session scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Mark to move, or the mark that made the final move once the game is over.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Positions played since the last reset, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Whether the computer has reserved the current turn.
    pub fn is_computer_turn_pending(&self) -> bool {
        self.computer_pending
    }

    /// Seed of the engine's random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The heuristic's choice for the mark to move.
    ///
    /// Depends only on the board and mark to move; the random source is
    /// consulted for corner and fallback tie-breaks. Returns `None` once the
    /// game is over.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Option<Position> {
        match self.status {
            GameStatus::InProgress { current } => choose_move(&self.board, current, &mut self.rng),
            _ => None,
        }
    }

    /// Serializable view of the engine.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.squares().iter().map(|s| s.mark()).collect(),
            status: self.status,
            mode: self.mode,
            score_x: self.scores.get(Mark::X),
            score_o: self.scores.get(Mark::O),
            computer_pending: self.computer_pending,
            history: self.history.iter().map(|p| p.to_index()).collect(),
            seed: self.rng.seed(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Plays the mark to move at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Rejects out-of-range indices, finished games, pending computer turns
    /// and occupied squares. Nothing changes on rejection.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.computer_pending {
            return Err(MoveError::ComputerTurnPending);
        }
        self.apply(pos)
    }

    /// Resolves a pending computer turn.
    ///
    /// Returns the square the computer took, or `None` if no turn was
    /// pending.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Option<Position> {
        if !self.computer_pending {
            return None;
        }
        self.computer_pending = false;

        let pos = self.computer_move()?;
        match self.apply(pos) {
            Ok(_) => {
                info!(position = ?pos, "Computer moved");
                Some(pos)
            }
            Err(e) => {
                warn!(error = %e, position = ?pos, "Computer move rejected");
                None
            }
        }
    }

    /// Clears the board for another round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.board = Board::new();
        self.current = Mark::X;
        self.status = GameStatus::InProgress { current: Mark::X };
        self.computer_pending = false;
        self.history.clear();
    }

    /// Starts a fresh match: clears the board and zeroes scores.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.reset();
        self.scores = Scores::default();
    }

    /// Switches mode. Always starts a fresh match.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        info!(from = %self.mode, to = %mode, "Changing mode");
        self.mode = mode;
        self.new_game();
    }

    /// Places the current mark and advances the state machine.
    fn apply(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.board.get(pos) != Square::Empty {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.current;
        self.board.place(pos, mark);
        self.history.push(pos);

        self.status = if let Some((winner, line)) = winning_line(&self.board) {
            self.scores.record_win(winner);
            info!(?winner, line = ?line.indices(), "Game won");
            GameStatus::Won { winner, line }
        } else if is_full(&self.board) {
            info!("Game tied");
            GameStatus::Tied
        } else {
            self.current = mark.opponent();
            GameStatus::InProgress {
                current: self.current,
            }
        };

        if !self.status.is_over() && self.mode.is_computer(self.current) {
            debug!("Reserving turn for computer");
            self.computer_pending = true;
        }

        debug!(position = ?pos, ?mark, status = ?self.status, "Move applied");
        Ok(self.status)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

/// Serializable engine state for headless drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Squares in row-major order; `None` is empty.
    pub board: Vec<Option<Mark>>,
    /// Game status.
    pub status: GameStatus,
    /// Game mode.
    pub mode: Mode,
    /// Wins for X this session.
    pub score_x: u32,
    /// Wins for O this session.
    pub score_o: u32,
    /// Whether the computer has reserved the turn.
    pub computer_pending: bool,
    /// Indices played since the last reset.
    pub history: Vec<usize>,
    /// Seed of the engine's random source; replaying with it reproduces the
    /// computer's choices.
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(engine: &mut GameEngine, moves: &[usize]) {
        for &m in moves {
            engine.play(m).unwrap();
        }
    }

    #[test]
    fn test_new_engine_starts_with_x() {
        let engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 1);
        assert_eq!(engine.status(), GameStatus::InProgress { current: Mark::X });
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.scores(), Scores::default());
    }

    #[test]
    fn test_turns_alternate() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 1);
        assert_eq!(
            engine.play(4),
            Ok(GameStatus::InProgress { current: Mark::O })
        );
        assert_eq!(
            engine.play(0),
            Ok(GameStatus::InProgress { current: Mark::X })
        );
        assert_eq!(engine.history(), &[Position::Center, Position::TopLeft]);
    }

    #[test]
    fn test_win_records_score() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 1);
        play_all(&mut engine, &[0, 3, 1, 4, 2]);
        match engine.status() {
            GameStatus::Won { winner, line } => {
                assert_eq!(winner, Mark::X);
                assert_eq!(line.indices(), [0, 1, 2]);
            }
            other => panic!("expected win, got {other:?}"),
        }
        assert_eq!(engine.scores().get(Mark::X), 1);
        assert_eq!(engine.scores().get(Mark::O), 0);
        assert_eq!(engine.current(), Mark::X);
    }

    #[test]
    fn test_tie_does_not_score() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 1);
        play_all(&mut engine, &[0, 4, 2, 1, 7, 6, 3, 5, 8]);
        assert_eq!(engine.status(), GameStatus::Tied);
        assert_eq!(engine.scores(), Scores::default());
    }

    #[test]
    fn test_rejected_moves_leave_state_untouched() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 1);
        engine.play(4).unwrap();
        let before = engine.snapshot();

        assert_eq!(engine.play(4), Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(engine.play(9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 1);
        play_all(&mut engine, &[0, 3, 1, 4, 2]);
        let before = engine.snapshot();
        assert_eq!(engine.play(8), Err(MoveError::GameOver));
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.computer_move(), None);
    }

    #[test]
    fn test_computer_turn_is_reserved_after_human_move() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsComputer, 3);
        engine.play(0).unwrap();
        assert!(engine.is_computer_turn_pending());

        let before = engine.snapshot();
        assert_eq!(engine.play(1), Err(MoveError::ComputerTurnPending));
        assert_eq!(engine.snapshot(), before);

        assert_eq!(engine.play_computer_turn(), Some(Position::Center));
        assert!(!engine.is_computer_turn_pending());
        assert_eq!(engine.status(), GameStatus::InProgress { current: Mark::X });
        assert_eq!(engine.play_computer_turn(), None);
    }

    #[test]
    fn test_pvp_never_reserves_turns() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 3);
        engine.play(0).unwrap();
        assert!(!engine.is_computer_turn_pending());
        assert_eq!(engine.play_computer_turn(), None);
    }

    #[test]
    fn test_reset_keeps_scores_and_clears_pending() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 1);
        play_all(&mut engine, &[0, 3, 1, 4, 2]);
        engine.reset();
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.status(), GameStatus::InProgress { current: Mark::X });
        assert_eq!(engine.scores().get(Mark::X), 1);
        assert!(engine.history().is_empty());

        engine.set_mode(Mode::PlayerVsComputer);
        engine.play(0).unwrap();
        engine.reset();
        assert!(!engine.is_computer_turn_pending());
        assert_eq!(engine.play(4), Ok(GameStatus::InProgress { current: Mark::O }));
    }

    #[test]
    fn test_new_game_and_set_mode_zero_scores() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 1);
        play_all(&mut engine, &[0, 3, 1, 4, 2]);
        engine.new_game();
        assert_eq!(engine.scores(), Scores::default());

        play_all(&mut engine, &[0, 3, 1, 4, 2]);
        engine.set_mode(Mode::PlayerVsComputer);
        assert_eq!(engine.mode(), Mode::PlayerVsComputer);
        assert_eq!(engine.scores(), Scores::default());
        assert_eq!(engine.status(), GameStatus::InProgress { current: Mark::X });
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = GameEngine::with_seed(Mode::PlayerVsComputer, 5);
        engine.play(4).unwrap();
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["board"][4], "X");
        assert_eq!(json["board"][0], serde_json::Value::Null);
        assert_eq!(json["mode"], "pvc");
        assert_eq!(json["computer_pending"], true);
        assert_eq!(json["history"], serde_json::json!([4]));
        assert_eq!(json["seed"], 5);
    }
}
