//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use noughts_engine::{GameEngine, GameStatus, Position};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    message: String,
}

impl App {
    /// Creates a new application around an engine.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            message: "Welcome! Choose your game mode and start playing!".to_string(),
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last event message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Turn indicator or result line.
    pub fn headline(&self) -> String {
        let mode = self.engine.mode();
        match self.engine.status() {
            GameStatus::InProgress { .. } if self.engine.is_computer_turn_pending() => {
                "Computer is thinking...".to_string()
            }
            GameStatus::InProgress { current } => format!("{}'s Turn", mode.player_name(current)),
            GameStatus::Won { winner, .. } => format!("{} wins!", mode.player_name(winner)),
            GameStatus::Tied => "It's a tie!".to_string(),
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => {
                self.engine.reset();
                self.message = "Board cleared. Scores kept.".to_string();
            }
            KeyCode::Char('n') => {
                self.engine.new_game();
                self.message = "New game. Scores reset.".to_string();
            }
            KeyCode::Char('m') => {
                let mode = self.engine.mode().toggle();
                self.engine.set_mode(mode);
                self.message = format!("{} - new game started.", mode.label());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                let square = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index);
                if let Some(pos) = square {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
        Flow::Continue
    }

    /// Lets the computer take its reserved turn.
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self) {
        if let Some(pos) = self.engine.play_computer_turn() {
            self.message = format!("Computer played {}.", pos.label());
            self.after_move();
        }
    }

    fn play(&mut self, pos: Position) {
        match self.engine.play(pos.to_index()) {
            Ok(_) => {
                debug!(position = ?pos, "Move applied");
                self.message = "Make your move!".to_string();
                self.after_move();
            }
            Err(e) => {
                debug!(position = ?pos, error = %e, "Move ignored");
                self.message = e.to_string();
            }
        }
    }

    fn after_move(&mut self) {
        if self.engine.status().is_over() {
            info!(status = ?self.engine.status(), scores = ?self.engine.scores(), "Round over");
            self.message = "Press 'r' to play again or 'n' for a new game.".to_string();
        }
    }
}
