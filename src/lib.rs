//! Noughts - tic-tac-toe in the terminal.
//!
//! The game rules live in [`noughts_engine`]; this crate is the front end
//! that drives them.
//!
//! # Architecture
//!
//! - **CLI**: clap commands for interactive and scripted play
//! - **Config**: optional TOML file with command-line overrides
//! - **TUI**: ratatui renderer and a tokio loop that schedules the computer's turn
//! - **Script**: headless runner that prints a JSON snapshot
//!
//! # Example
//!
//! ```
//! use noughts::{ScriptStep, run_script};
//! use noughts_engine::{GameEngine, Mode};
//!
//! let mut engine = GameEngine::with_seed(Mode::PlayerVsComputer, 1);
//! let steps: Vec<ScriptStep> = ["0", "1"].iter().map(|s| s.parse().unwrap()).collect();
//! let snapshot = run_script(&mut engine, &steps);
//! // The computer took the center, then blocked the top row.
//! assert_eq!(snapshot.history, vec![0, 4, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod script;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, GameArgs};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Headless runner
pub use script::{ScriptStep, ScriptStepError, run_script};

// Crate-level exports - Terminal UI
pub use tui::{App, Flow, move_cursor, run_tui};
