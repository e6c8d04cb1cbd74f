//! Tests for the application state driven by translated input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotseat::{App, InputAction, KeyBindings};
use hotseat_tictactoe::{Direction, FocusTarget, GameStatus, Mark, Position, Square};

fn click(app: &mut App, index: usize) {
    app.handle(InputAction::ActivateCell(Position::from_index(index).unwrap()));
}

#[test]
fn test_initial_status_line() {
    let app = App::new();
    assert_eq!(app.status_line(), "Player X's turn");
    assert_eq!(app.focus().target(), FocusTarget::Cell(Position::TopLeft));
    assert!(!*app.should_quit());
}

#[test]
fn test_status_line_alternates() {
    let mut app = App::new();
    click(&mut app, 4);
    assert_eq!(app.status_line(), "Player O's turn");
    click(&mut app, 0);
    assert_eq!(app.status_line(), "Player X's turn");
}

#[test]
fn test_status_line_win() {
    let mut app = App::new();
    for index in [0, 1, 3, 4, 6] {
        click(&mut app, index);
    }
    assert_eq!(app.status_line(), "Player X wins!");
    for index in [0, 3, 6] {
        assert!(app.is_winning_cell(Position::from_index(index).unwrap()));
    }
    assert!(!app.is_winning_cell(Position::TopCenter));
}

#[test]
fn test_status_line_tie() {
    let mut app = App::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        click(&mut app, index);
    }
    assert_eq!(app.game().status(), GameStatus::Tied);
    assert_eq!(app.status_line(), "It's a tie!");
}

#[test]
fn test_keyboard_move_advances_focus() {
    let mut app = App::new();
    app.handle(InputAction::Activate);
    assert_eq!(
        app.game().board().get(Position::TopLeft),
        Square::Occupied(Mark::X)
    );
    assert_eq!(app.focus().target(), FocusTarget::Cell(Position::TopCenter));
}

#[test]
fn test_pointer_move_advances_focus() {
    let mut app = App::new();
    click(&mut app, 4);
    assert_eq!(app.focus().target(), FocusTarget::Cell(Position::MiddleRight));
}

#[test]
fn test_focus_skips_filled_cells() {
    let mut app = App::new();
    click(&mut app, 1);
    click(&mut app, 2);
    // Back up to 0; playing it must jump past 1 and 2.
    assert_eq!(app.focus().cursor(), Position::MiddleLeft);
    app.handle(InputAction::Navigate(Direction::Up));
    app.handle(InputAction::Activate);
    assert_eq!(app.focus().target(), FocusTarget::Cell(Position::MiddleLeft));
}

#[test]
fn test_click_on_occupied_cell_is_ignored() {
    let mut app = App::new();
    click(&mut app, 4);
    let before = app.game().clone();
    let focus = app.focus().clone();
    click(&mut app, 4);
    assert_eq!(app.game(), &before);
    assert_eq!(app.focus(), &focus);
}

#[test]
fn test_arrowing_onto_filled_cell_keeps_focus() {
    let mut app = App::new();
    click(&mut app, 4);
    assert_eq!(app.focus().target(), FocusTarget::Cell(Position::MiddleRight));
    // The cursor passes over the filled center; focus stays put.
    app.handle(InputAction::Navigate(Direction::Left));
    assert_eq!(app.focus().cursor(), Position::Center);
    assert_eq!(app.focus().target(), FocusTarget::Cell(Position::MiddleRight));
    assert!(app.is_disabled(Position::Center));

    // Activating places on the focused cell, never the filled one.
    app.handle(InputAction::Activate);
    assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(
        app.game().board().get(Position::MiddleRight),
        Square::Occupied(Mark::O)
    );
}

#[test]
fn test_arrowing_past_filled_cell() {
    let mut app = App::new();
    click(&mut app, 4);
    app.handle(InputAction::Navigate(Direction::Left));
    app.handle(InputAction::Navigate(Direction::Left));
    assert_eq!(app.focus().target(), FocusTarget::Cell(Position::MiddleLeft));
}

#[test]
fn test_focus_label() {
    let mut app = App::new();
    assert_eq!(app.focus_label(), "Cell 1");
    click(&mut app, 4);
    assert_eq!(app.focus_label(), "Cell 6");
    for index in [0, 3, 1, 6, 2] {
        click(&mut app, index);
    }
    assert!(app.game().is_over());
    assert_eq!(app.focus_label(), "Board");
}

#[test]
fn test_navigation_clamps() {
    let mut app = App::new();
    app.handle(InputAction::Navigate(Direction::Up));
    app.handle(InputAction::Navigate(Direction::Left));
    assert_eq!(app.focus().cursor(), Position::TopLeft);
    app.handle(InputAction::Navigate(Direction::Right));
    app.handle(InputAction::Navigate(Direction::Down));
    assert_eq!(app.focus().cursor(), Position::Center);
}

#[test]
fn test_game_end_moves_focus_to_board() {
    let mut app = App::new();
    for index in [0, 3, 1, 4, 2] {
        click(&mut app, index);
    }
    assert_eq!(app.focus().target(), FocusTarget::Board);
    assert!(Position::ALL.iter().all(|pos| app.is_disabled(*pos)));

    // Arrows and activation do nothing while the board holds focus.
    app.handle(InputAction::Navigate(Direction::Down));
    app.handle(InputAction::Activate);
    assert_eq!(app.focus().target(), FocusTarget::Board);
    assert_eq!(app.game().history().len(), 5);
}

#[test]
fn test_clicks_after_game_end_are_ignored() {
    let mut app = App::new();
    for index in [0, 3, 1, 4, 2] {
        click(&mut app, index);
    }
    let before = app.game().clone();
    click(&mut app, 8);
    assert_eq!(app.game(), &before);
    assert_eq!(app.focus().target(), FocusTarget::Board);
}

#[test]
fn test_restart_refocuses_first_cell() {
    let mut app = App::new();
    for index in [0, 3, 1, 4, 2] {
        click(&mut app, index);
    }
    app.handle(InputAction::Restart);
    assert_eq!(app.status_line(), "Player X's turn");
    assert_eq!(app.game().board().occupied_count(), 0);
    assert_eq!(app.focus().target(), FocusTarget::Cell(Position::TopLeft));
    assert!(!app.is_disabled(Position::TopLeft));
}

#[test]
fn test_restart_mid_game() {
    let mut app = App::new();
    click(&mut app, 4);
    app.handle(InputAction::Restart);
    app.handle(InputAction::Restart);
    assert_eq!(app.game().current_player(), Mark::X);
    assert_eq!(app.game().status(), GameStatus::InProgress);
}

#[test]
fn test_quit() {
    let mut app = App::new();
    app.handle(InputAction::Quit);
    assert!(*app.should_quit());
}

#[test]
fn test_ctrl_c_quits_without_clearing() {
    let mut app = App::new();
    click(&mut app, 4);
    let action = hotseat::key_action(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &KeyBindings::default(),
    );
    assert_eq!(action, Some(InputAction::Quit));
    app.handle(action.unwrap());
    assert!(*app.should_quit());
    assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Mark::X));
}
