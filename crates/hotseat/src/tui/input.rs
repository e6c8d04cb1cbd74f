//! Translation of raw terminal events into [`InputAction`]s.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use hotseat_tictactoe::{Direction, FocusNavigator};

use super::app::InputAction;
use super::ui::BoardLayout;
use crate::config::KeyBindings;

/// Maps a key press to an action. Releases and unbound keys map to `None`.
pub fn key_action(key: KeyEvent, keys: &KeyBindings) -> Option<InputAction> {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Bound characters only fire unmodified (Shift is part of the character).
    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();

    match key.code {
        KeyCode::Left => Some(InputAction::Navigate(Direction::Left)),
        KeyCode::Right => Some(InputAction::Navigate(Direction::Right)),
        KeyCode::Up => Some(InputAction::Navigate(Direction::Up)),
        KeyCode::Down => Some(InputAction::Navigate(Direction::Down)),
        KeyCode::Enter => Some(InputAction::Activate),
        KeyCode::Esc => Some(InputAction::Quit),
        KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputAction::Quit)
        }
        KeyCode::Char(_) if !plain => None,
        KeyCode::Char(' ') => Some(InputAction::Activate),
        KeyCode::Char(c) if matches_key(c, *keys.restart()) || matches_key(c, *keys.clear()) => {
            Some(InputAction::Restart)
        }
        KeyCode::Char(c) if matches_key(c, *keys.quit()) => Some(InputAction::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| InputAction::ActivateCell(FocusNavigator::clamp(i64::from(digit) - 1))),
        _ => None,
    }
}

/// Maps a left click inside a rendered cell to a pointer activation.
pub fn mouse_action(mouse: MouseEvent, layout: &BoardLayout) -> Option<InputAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .cell_at(mouse.column, mouse.row)
            .map(InputAction::ActivateCell),
        _ => None,
    }
}

fn matches_key(pressed: char, bound: char) -> bool {
    pressed.eq_ignore_ascii_case(&bound)
}
