//! Rendering tests against ratatui's in-memory backend.

use hotseat::{App, BoardLayout, InputAction, KeyBindings, draw};
use hotseat_tictactoe::{Direction, Position};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 24;

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|frame| draw(frame, app, &KeyBindings::default()))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn lines(buffer: &Buffer) -> Vec<String> {
    (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn cell_center(pos: Position) -> (u16, u16) {
    let cell = BoardLayout::new(Rect::new(0, 0, WIDTH, HEIGHT)).cell(pos);
    (cell.x + cell.width / 2, cell.y + cell.height / 2)
}

fn play(moves: &[usize]) -> App {
    let mut app = App::new();
    for &index in moves {
        app.handle(InputAction::ActivateCell(Position::from_index(index).unwrap()));
    }
    app
}

#[test]
fn test_renders_title_and_turn() {
    let text = lines(&render(&App::new()));
    assert!(text.iter().any(|l| l.contains("Tic-Tac-Toe")));
    assert!(text.iter().any(|l| l.contains("Player X's turn")));
}

#[test]
fn test_renders_marks() {
    let app = play(&[4, 0]);
    let buffer = render(&app);
    assert_eq!(buffer[cell_center(Position::Center)].symbol(), "X");
    assert_eq!(buffer[cell_center(Position::TopLeft)].symbol(), "O");
    // Empty cells show their number.
    assert_eq!(buffer[cell_center(Position::BottomRight)].symbol(), "9");
}

#[test]
fn test_focused_cell_highlighted() {
    let buffer = render(&App::new());
    assert_eq!(buffer[cell_center(Position::TopLeft)].bg, Color::White);
    assert_ne!(buffer[cell_center(Position::TopCenter)].bg, Color::White);
}

#[test]
fn test_filled_cell_never_highlighted() {
    let mut app = play(&[4]);
    app.handle(InputAction::Navigate(Direction::Left));
    assert_eq!(app.focus().cursor(), Position::Center);
    let buffer = render(&app);
    assert_ne!(buffer[cell_center(Position::Center)].bg, Color::White);
    assert_eq!(buffer[cell_center(Position::MiddleRight)].bg, Color::White);
}

#[test]
fn test_board_title_names_focus() {
    let text = lines(&render(&App::new()));
    assert!(text.iter().any(|l| l.contains(" Cell 1 ")));

    let text = lines(&render(&play(&[4])));
    assert!(text.iter().any(|l| l.contains(" Cell 6 ")));

    let text = lines(&render(&play(&[0, 3, 1, 4, 2])));
    assert!(text.iter().any(|l| l.contains(" Board ")));
}

#[test]
fn test_winning_line_highlighted() {
    let app = play(&[0, 1, 3, 4, 6]);
    let buffer = render(&app);
    for index in [0, 3, 6] {
        let pos = Position::from_index(index).unwrap();
        assert_eq!(buffer[cell_center(pos)].bg, Color::Green, "{pos}");
    }
    assert_ne!(buffer[cell_center(Position::TopCenter)].bg, Color::Green);
    assert!(lines(&buffer).iter().any(|l| l.contains("Player X wins!")));
}

#[test]
fn test_tie_message() {
    let app = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let text = lines(&render(&app));
    assert!(text.iter().any(|l| l.contains("It's a tie!")));
}

#[test]
fn test_help_lists_bindings() {
    let text = lines(&render(&App::new()));
    assert!(text.iter().any(|l| l.contains("r/c restart") && l.contains("q quit")));
}
