//! Noughts - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{AppConfig, Cli, Command, GameArgs, ScriptStep, run_script, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(game) => run_tui(load_config(&game)?).await,
        Command::Script { game, moves } => run_headless(&game, &moves),
    }
}

/// Resolve config file plus command-line overrides.
fn load_config(game: &GameArgs) -> Result<AppConfig> {
    let config = AppConfig::load(game.config.as_deref()).context("Failed to load configuration")?;
    Ok(config.with_overrides(game.mode, game.seed))
}

/// Apply scripted moves and print the final state as JSON.
fn run_headless(game: &GameArgs, moves: &[ScriptStep]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(game)?;
    let mut engine = config.new_engine();
    info!(mode = %engine.mode(), seed = engine.seed(), "Running script");

    let snapshot = run_script(&mut engine, moves);
    let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
    println!("{}", json);
    Ok(())
}
