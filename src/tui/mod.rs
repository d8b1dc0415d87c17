//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::move_cursor;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, error, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so output doesn't interfere with the TUI
    init_file_logging(config.log_file())?;

    let engine = config.new_engine();
    info!(mode = %engine.mode(), seed = engine.seed(), "Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let reader = tokio::task::spawn_blocking(move || read_keys(key_tx));

    let mut app = App::new(engine);
    let res = run_app(&mut terminal, &mut app, &mut key_rx, config.think_delay()).await;

    // Closing the channel stops the reader at its next poll
    drop(key_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = reader.await {
        warn!(error = %e, "Keyboard reader task failed");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Sets up a file-backed tracing subscriber.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Forwards key presses to the event loop until the receiver goes away.
fn read_keys(key_tx: mpsc::UnboundedSender<KeyCode>) {
    while !key_tx.is_closed() {
        match event::poll(Duration::from_millis(100)) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                error!(error = %e, "Failed to poll terminal events");
                return;
            }
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if key_tx.send(key.code).is_err() {
                    return;
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Failed to read terminal event");
                return;
            }
        }
    }
}

/// Draw, then wait for either a key or the computer's thinking time to elapse.
#[instrument(skip_all, fields(think_delay_ms = think_delay.as_millis() as u64))]
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    key_rx: &mut mpsc::UnboundedReceiver<KeyCode>,
    think_delay: Duration,
) -> Result<()> {
    let mut computer_deadline: Option<Instant> = None;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.engine().is_computer_turn_pending() {
            computer_deadline.get_or_insert_with(|| Instant::now() + think_delay);
        } else {
            computer_deadline = None;
        }
        let deadline = computer_deadline.unwrap_or_else(Instant::now);

        tokio::select! {
            key = key_rx.recv() => match key {
                Some(code) => {
                    if app.handle_key(code) == Flow::Quit {
                        info!("User quit");
                        return Ok(());
                    }
                }
                None => anyhow::bail!("Keyboard input closed"),
            },
            _ = sleep_until(deadline), if computer_deadline.is_some() => {
                debug!("Computer thinking time elapsed");
                computer_deadline = None;
                app.computer_turn();
            }
        }
    }
}
