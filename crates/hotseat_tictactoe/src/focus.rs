//! Keyboard focus navigation over the board.
//!
//! The navigator owns a cursor that is kept on a playable cell whenever one
//! exists. After every state change the caller asks it to [`refocus`] so
//! focus never lingers on a filled cell or on a finished board.
//!
//! [`refocus`]: FocusNavigator::refocus

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::game::GameState;
use crate::position::Position;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

/// Where focus should rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusTarget {
    /// A specific cell.
    Cell(Position),
    /// The board as a whole. Used when no cell is playable.
    Board,
}

/// Cursor over the 9 cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusNavigator {
    cursor: Position,
    target: FocusTarget,
}

impl FocusNavigator {
    /// Starts focused on the top-left cell.
    pub fn new() -> Self {
        Self {
            cursor: Position::TopLeft,
            target: FocusTarget::Cell(Position::TopLeft),
        }
    }

    /// The last focused cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Where focus currently rests.
    pub fn target(&self) -> FocusTarget {
        self.target
    }

    /// Moves the cursor one step, stopping at grid edges.
    ///
    /// Only the cursor moves; the caller decides whether focus follows.
    #[instrument(skip(self), fields(from = self.cursor.to_index()))]
    pub fn move_focus(&mut self, direction: Direction) -> Position {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let (row, col) = match direction {
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(2)),
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(2), col),
        };
        if let Some(next) = Position::from_row_col(row, col) {
            self.cursor = next;
        }
        self.cursor
    }

    /// Moves the cursor and transfers focus to it if the cell is playable.
    ///
    /// A filled cell cannot take focus, so the target stays on the last
    /// playable cell while the cursor passes over it.
    #[instrument(skip(self, state))]
    pub fn navigate(&mut self, state: &GameState, direction: Direction) -> FocusTarget {
        let pos = self.move_focus(direction);
        if state.is_playable(pos) {
            self.target = FocusTarget::Cell(pos);
        }
        self.target
    }

    /// First empty cell strictly after `from`, wrapping once around the board.
    ///
    /// `None` when the round is over or no cell is empty.
    #[instrument(skip(state))]
    pub fn next_playable(state: &GameState, from: Position) -> Option<Position> {
        if state.is_over() {
            return None;
        }
        (1..=9)
            .map(|offset| Position::ALL[(from.to_index() + offset) % 9])
            .find(|pos| state.board().is_empty(*pos))
    }

    /// Constrains any integer to a valid cell. Digit shortcuts resolve
    /// their cell through here.
    pub fn clamp(index: i64) -> Position {
        let index = index.clamp(0, 8) as usize;
        Position::ALL[index]
    }

    /// Focuses `pos` directly, as a pointer does.
    pub fn focus(&mut self, pos: Position) {
        self.cursor = pos;
        self.target = FocusTarget::Cell(pos);
    }

    /// Re-derives focus after a state change, starting the search after
    /// `from`. Falls back to [`FocusTarget::Board`] when nothing is playable;
    /// the cursor keeps its last cell in that case.
    #[instrument(skip(self, state))]
    pub fn refocus(&mut self, state: &GameState, from: Position) -> FocusTarget {
        match Self::next_playable(state, from) {
            Some(pos) => self.focus(pos),
            None => self.target = FocusTarget::Board,
        }
        debug!(focus = ?self.target, "Focus re-derived");
        self.target
    }

    /// Back to the top-left cell.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FocusNavigator {
    fn default() -> Self {
        Self::new()
    }
}
