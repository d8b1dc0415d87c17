//! Tests for TUI application state and key handling.

use crossterm::event::KeyCode;
use noughts::{App, Flow, move_cursor};
use noughts_engine::{GameEngine, GameStatus, Mark, Mode, Position};

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        assert_eq!(app.handle_key(KeyCode::Char(c)), Flow::Continue);
    }
}

#[test]
fn test_digit_keys_play_and_move_cursor() {
    let mut app = App::new(GameEngine::new(Mode::PlayerVsPlayer));
    press(&mut app, "9");
    assert_eq!(app.cursor(), Position::BottomRight);
    assert_eq!(
        app.engine().board().get(Position::BottomRight).mark(),
        Some(Mark::X)
    );
    assert_eq!(app.headline(), "Player O's Turn");
}

#[test]
fn test_enter_plays_cursor_square() {
    let mut app = App::new(GameEngine::new(Mode::PlayerVsPlayer));
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);
    assert_eq!(app.cursor(), Position::TopLeft);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.engine().history(), &[Position::TopLeft]);
}

#[test]
fn test_occupied_square_reports_error() {
    let mut app = App::new(GameEngine::new(Mode::PlayerVsPlayer));
    press(&mut app, "55");
    assert_eq!(app.message(), "Center is already occupied");
    assert_eq!(app.engine().history().len(), 1);
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let mut app = App::new(GameEngine::new(Mode::PlayerVsPlayer));
    press(&mut app, "0x");
    assert_eq!(app.engine().board().occupied(), 0);
    assert_eq!(app.cursor(), Position::Center);
}

#[test]
fn test_win_then_reset_keeps_scores() {
    let mut app = App::new(GameEngine::new(Mode::PlayerVsPlayer));
    press(&mut app, "14253");
    assert_eq!(app.headline(), "Player X wins!");
    assert_eq!(app.message(), "Press 'r' to play again or 'n' for a new game.");
    assert_eq!(app.engine().scores().get(Mark::X), 1);

    press(&mut app, "r");
    assert_eq!(app.engine().board().occupied(), 0);
    assert_eq!(app.engine().scores().get(Mark::X), 1);
    assert_eq!(app.headline(), "Player X's Turn");

    press(&mut app, "n");
    assert_eq!(app.engine().scores().get(Mark::X), 0);
}

#[test]
fn test_mode_toggle_starts_new_game() {
    let mut app = App::new(GameEngine::new(Mode::PlayerVsPlayer));
    press(&mut app, "5m");
    assert_eq!(app.engine().mode(), Mode::PlayerVsComputer);
    assert_eq!(app.engine().board().occupied(), 0);
    assert_eq!(app.message(), "Player vs Computer - new game started.");
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(GameEngine::new(Mode::PlayerVsPlayer));
    assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
    assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
}

#[test]
fn test_computer_turn_in_pvc() {
    let mut app = App::new(GameEngine::with_seed(Mode::PlayerVsComputer, 3));
    press(&mut app, "1");
    assert!(app.engine().is_computer_turn_pending());
    assert_eq!(app.headline(), "Computer is thinking...");

    press(&mut app, "2");
    assert_eq!(app.message(), "Waiting for the computer to move");

    app.computer_turn();
    assert_eq!(app.message(), "Computer played Center.");
    assert_eq!(app.headline(), "Player X's Turn");
    assert!(matches!(
        app.engine().status(),
        GameStatus::InProgress { current: Mark::X }
    ));
}

#[test]
fn test_reset_cancels_pending_computer_turn() {
    let mut app = App::new(GameEngine::with_seed(Mode::PlayerVsComputer, 3));
    press(&mut app, "1r");
    assert!(!app.engine().is_computer_turn_pending());

    app.computer_turn();
    assert_eq!(app.engine().board().occupied(), 0);
}

#[test]
fn test_cursor_stops_at_edges() {
    assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
    assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
    assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
    assert_eq!(
        move_cursor(Position::BottomCenter, KeyCode::Down),
        Position::BottomCenter
    );
    assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
}
