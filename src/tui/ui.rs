//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Cell, Player, Position};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title, board, status, footer] = screen_areas(frame.area());

    let heading = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, title);

    draw_board(frame, board, app);

    let mut lines = vec![Line::from(Span::styled(
        app.status_line(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];
    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let status_text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, status);

    let mut hints = String::from("arrows/enter/1-9 play | r reset | q quit");
    if let Some(label) = app.cursor_label() {
        hints = format!("{}  |  {}", label, hints);
    }
    let footer_text = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer_text, footer);
}

/// Maps a terminal coordinate to the board cell drawn there.
pub fn cell_at(screen: Rect, column: u16, row: u16) -> Option<Position> {
    let [_, board, _, _] = screen_areas(screen);
    let cells = cell_rects(center_rect(board, BOARD_WIDTH, BOARD_HEIGHT));
    Position::ALL
        .into_iter()
        .zip(cells)
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(pos, _)| pos)
}

fn screen_areas(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(4),            // Status
            Constraint::Length(1),            // Footer
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn cell_rects(board: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        let index = pos.to_index() as u16;
        let cell = Rect::new(
            board.x + (index % 3) * (CELL_WIDTH + 1),
            board.y + (index / 3) * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        );
        cell.intersection(board)
    })
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let separator = Style::default().fg(Color::DarkGray);

    // Rules first so the bars' junctions land on top of them.
    for line in 1..3u16 {
        let y = board_area.y + line * (CELL_HEIGHT + 1) - 1;
        let rule = Rect::new(board_area.x, y, board_area.width, 1).intersection(board_area);
        frame.render_widget(
            Paragraph::new("─".repeat(BOARD_WIDTH as usize)).style(separator),
            rule,
        );
    }

    for line in 1..3u16 {
        let x = board_area.x + line * (CELL_WIDTH + 1) - 1;
        let bar = Rect::new(x, board_area.y, 1, board_area.height).intersection(board_area);
        let bars: Vec<Line> = (0..BOARD_HEIGHT)
            .map(|row| {
                if row % (CELL_HEIGHT + 1) == CELL_HEIGHT {
                    Line::from("┼")
                } else {
                    Line::from("│")
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(bars).style(separator), bar);
    }

    let winning = if *app.config().highlight_winning_line() {
        app.engine().winning_line()
    } else {
        None
    };

    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(board_area)) {
        let in_line = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, rect, app, pos, in_line);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, in_line: bool) {
    let (symbol, base_style) = match app.engine().board().get(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() && !app.engine().game_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if in_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Middle line of the cell carries the mark; the full cell takes the background.
    let lines = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
