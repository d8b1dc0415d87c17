//! Headless driver: apply a list of moves and report the final state.
//!
//! Pending computer turns are resolved immediately, with no thinking delay.

use derive_more::Display;
use noughts_engine::{GameEngine, Position, Snapshot};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// One step of a scripted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScriptStep {
    /// The player to move takes this square.
    #[display("{}", _0)]
    Square(Position),
    /// The heuristic picks a square for the player to move.
    #[display("cpu")]
    Computer,
}

/// Error for a step that is neither a square nor `cpu`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unrecognized move {:?}: expected 0-8, a square label, or \"cpu\"", _0)]
pub struct ScriptStepError(pub String);

impl std::error::Error for ScriptStepError {}

impl FromStr for ScriptStep {
    type Err = ScriptStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if matches!(s.trim().to_lowercase().as_str(), "cpu" | "computer") {
            return Ok(ScriptStep::Computer);
        }
        Position::from_label_or_number(s)
            .map(ScriptStep::Square)
            .ok_or_else(|| ScriptStepError(s.to_string()))
    }
}

/// Runs `steps` against `engine` and returns the final snapshot.
///
/// Rejected moves are logged and skipped, the same way the interactive front
/// end ignores clicks on taken squares.
#[instrument(skip(engine, steps), fields(mode = %engine.mode(), steps = steps.len()))]
pub fn run_script(engine: &mut GameEngine, steps: &[ScriptStep]) -> Snapshot {
    for step in steps {
        match *step {
            ScriptStep::Square(pos) => {
                if let Err(e) = engine.play(pos.to_index()) {
                    warn!(step = %step, error = %e, "Move rejected");
                }
            }
            ScriptStep::Computer => match engine.computer_move() {
                Some(pos) => {
                    if let Err(e) = engine.play(pos.to_index()) {
                        warn!(step = %step, error = %e, "Move rejected");
                    }
                }
                None => warn!("No move available for the computer"),
            },
        }

        if let Some(pos) = engine.play_computer_turn() {
            info!(position = %pos, "Computer replied");
        }
    }

    info!(status = ?engine.status(), "Script finished");
    engine.snapshot()
}
