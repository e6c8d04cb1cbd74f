//! Stateless UI rendering for the board.

use hotseat_tictactoe::{FocusTarget, GameStatus, Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::config::KeyBindings;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
// Three cells, two one-cell gaps, and the frame border.
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2 + 2;

/// Screen geometry, shared by rendering and mouse hit-testing so a click
/// always resolves against the rectangles that were drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    title: Rect,
    board: Rect,
    status: Rect,
    help: Rect,
    cells: [Rect; 9],
    row_gaps: [Rect; 2],
    col_gaps: [Rect; 6],
}

impl BoardLayout {
    /// Computes the layout for a frame of the given size.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Status
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board.inner(Margin::new(1, 1)));

        let mut cells = [Rect::default(); 9];
        let mut col_gaps = [Rect::default(); 6];
        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                cells[row * 3 + col] = cols[col * 2];
            }
            col_gaps[row * 2] = cols[1];
            col_gaps[row * 2 + 1] = cols[3];
        }

        Self {
            title: chunks[0],
            board,
            status: chunks[2],
            help: chunks[3],
            cells,
            row_gaps: [rows[1], rows[3]],
            col_gaps,
        }
    }

    /// The rectangle a cell is drawn in.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// The frame around the whole board.
    pub fn board(&self) -> Rect {
        self.board
    }

    /// The cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ratatui::layout::Position::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cell(*pos).contains(point))
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, keys: &KeyBindings) {
    let layout = BoardLayout::new(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app);

    let status_color = match app.game().status() {
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Tied => Color::Magenta,
        GameStatus::InProgress => Color::Yellow,
    };
    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(help_text(keys))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn help_text(keys: &KeyBindings) -> String {
    format!(
        "arrows move · enter place · {}/{} restart · {} quit",
        keys.restart(),
        keys.clear(),
        keys.quit()
    )
}

fn draw_board(frame: &mut Frame, layout: &BoardLayout, app: &App) {
    // Focus falls back to the board itself once no cell is playable.
    let border_style = if app.focus().target() == FocusTarget::Board {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", app.focus_label()));
    frame.render_widget(frame_block, layout.board);

    for gap in layout.row_gaps {
        let sep = Paragraph::new("─".repeat(gap.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, gap);
    }
    for gap in layout.col_gaps {
        let sep = Paragraph::new(vec![Line::from("│"); gap.height as usize])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, gap);
    }

    for pos in Position::ALL {
        draw_cell(frame, layout.cell(pos), app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, mark_style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let focused = app.focus().target() == FocusTarget::Cell(pos) && !app.is_disabled(pos);
    let cell_style = if app.is_winning_cell(pos) {
        Style::default().bg(Color::Green)
    } else if focused {
        Style::default().bg(Color::White)
    } else if app.is_disabled(pos) {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    let mark_style = if app.is_winning_cell(pos) || focused {
        mark_style.fg(Color::Black)
    } else {
        mark_style
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, mark_style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(cell_style)
        .alignment(Alignment::Center);
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
