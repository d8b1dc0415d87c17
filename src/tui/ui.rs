//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use noughts_engine::{GameStatus, Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "arrows move | enter/space or 1-9 play | r reset | n new game | m mode | q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scores
            Constraint::Min(7),    // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let engine = app.engine();

    let title = Paragraph::new(format!("Noughts - {}", engine.mode().label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            app.headline(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(app.message()),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let scores = engine.scores();
    let line = Line::from(vec![
        Span::styled(
            format!("{}: {}", engine.mode().player_name(Mark::X), scores.get(Mark::X)),
            mark_style(Mark::X),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}: {}", engine.mode().player_name(Mark::O), scores.get(Mark::O)),
            mark_style(Mark::O),
        ),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let grid = Style::default().fg(Color::DarkGray);
    let winning = match app.engine().status() {
        GameStatus::Won { line, .. } => Some(line),
        _ => None,
    };

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::styled("───┼───┼───", grid));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", grid));
            }
            if let Some(pos) = Position::from_row_col(row, col) {
                let highlight = winning.is_some_and(|line| line.contains(pos));
                spans.push(cell(app, pos, highlight));
            }
        }
        lines.push(Line::from(spans));
    }

    // 3 cells of 3 columns, 2 separators, 2 border columns
    let [board_area] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(13)])
        .flex(Flex::Center)
        .areas(board_area);
    frame.render_widget(Paragraph::new(lines).block(Block::bordered()), board_area);
}

/// One square: its mark, or its 1-9 key when empty.
fn cell(app: &App, pos: Position, highlight: bool) -> Span<'static> {
    let engine = app.engine();
    let (symbol, style) = match engine.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    let style = if highlight {
        style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !engine.status().is_over() {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };
    Span::styled(format!(" {} ", symbol), style)
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
