//! Command-line interface for noughts.

use crate::script::ScriptStep;
use clap::{Args, Parser, Subcommand};
use noughts_engine::Mode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play(GameArgs),

    /// Apply a list of moves without a UI and print the result as JSON
    Script {
        /// Session options
        #[command(flatten)]
        game: GameArgs,

        /// Moves to apply: a square (0-8 or a label like "center"), or "cpu"
        /// to let the computer pick for whoever is to move
        #[arg(required = true)]
        moves: Vec<ScriptStep>,
    },
}

/// Options shared by every way of running a session.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Game mode: "pvp" (two players) or "pvc" (O is the computer)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Seed for the computer's random tie-breaks
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file (defaults to ./noughts.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
