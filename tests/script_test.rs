//! Tests for the headless script runner.

use noughts::{ScriptStep, run_script};
use noughts_engine::{GameEngine, GameStatus, Mark, Mode, Position};

fn steps(moves: &[&str]) -> Vec<ScriptStep> {
    moves.iter().map(|m| m.parse().unwrap()).collect()
}

#[test]
fn test_pvp_script_skips_rejected_moves() {
    let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
    let snapshot = run_script(&mut engine, &steps(&["0", "0", "1"]));
    assert_eq!(snapshot.history, vec![0, 1]);
    assert!(matches!(
        snapshot.status,
        GameStatus::InProgress { current: Mark::X }
    ));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
    let snapshot = run_script(&mut engine, &steps(&["0", "3", "1", "4", "2", "5"]));
    assert_eq!(snapshot.history, vec![0, 3, 1, 4, 2]);
    assert_eq!(snapshot.score_x, 1);
    assert_eq!(snapshot.score_o, 0);
    assert!(matches!(snapshot.status, GameStatus::Won { winner: Mark::X, .. }));
}

#[test]
fn test_pvc_computer_replies_after_each_move() {
    let mut engine = GameEngine::with_seed(Mode::PlayerVsComputer, 11);
    let snapshot = run_script(&mut engine, &steps(&["center"]));
    assert_eq!(snapshot.history.len(), 2);
    assert!(
        Position::CORNERS
            .iter()
            .any(|c| c.to_index() == snapshot.history[1])
    );
    assert!(!snapshot.computer_pending);
}

#[test]
fn test_snapshot_reports_seed_for_replay() {
    let mut first = GameEngine::new(Mode::PlayerVsComputer);
    let played = run_script(&mut first, &steps(&["center", "1"]));

    let mut replay = GameEngine::with_seed(Mode::PlayerVsComputer, played.seed);
    assert_eq!(run_script(&mut replay, &steps(&["center", "1"])), played);
}

#[test]
fn test_cpu_step_plays_for_either_side() {
    let mut engine = GameEngine::with_seed(Mode::PlayerVsPlayer, 2);
    let snapshot = run_script(&mut engine, &steps(&["cpu", "cpu"]));
    assert_eq!(snapshot.history[0], Position::Center.to_index());
    assert_eq!(snapshot.board[snapshot.history[1]], Some(Mark::O));
}

#[test]
fn test_computer_wins_when_player_ignores_threat() {
    let mut engine = GameEngine::with_seed(Mode::PlayerVsComputer, 4);
    for _ in 0..5 {
        let snapshot = engine.snapshot();
        if snapshot.status != (GameStatus::InProgress { current: Mark::X }) {
            break;
        }
        // Always take the lowest free square, ignoring the computer's threats
        let free = snapshot.board.iter().position(Option::is_none).unwrap();
        run_script(&mut engine, &[ScriptStep::Square(Position::from_index(free).unwrap())]);
    }
    assert!(engine.status().is_over());
    assert_eq!(engine.status().winner(), Some(Mark::O));
}
