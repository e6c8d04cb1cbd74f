//! Application state: one round plus the keyboard cursor.

use derive_getters::Getters;
use hotseat_tictactoe::{
    Direction, FocusNavigator, FocusTarget, GameState, GameStatus, Position,
};
use tracing::{debug, info, instrument};

/// An input already translated from a raw terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Arrow key.
    Navigate(Direction),
    /// Enter or Space on the focused cell.
    Activate,
    /// Pointer click (or digit shortcut) on a cell.
    ActivateCell(Position),
    /// Restart or clear.
    Restart,
    /// Leave the program.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone, Default, Getters)]
pub struct App {
    /// The current round.
    game: GameState,
    /// Keyboard cursor, re-derived after every move.
    focus: FocusNavigator,
    /// Set once the player asks to leave.
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one input event to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Navigate(direction) => {
                // Arrows only move focus while a cell holds it.
                if let FocusTarget::Cell(_) = self.focus.target() {
                    let focus = self.focus.navigate(&self.game, direction);
                    debug!(cursor = %self.focus.cursor(), ?focus, "Focus moved");
                }
            }
            InputAction::Activate => {
                if let FocusTarget::Cell(pos) = self.focus.target() {
                    self.place(pos);
                }
            }
            InputAction::ActivateCell(pos) => {
                if self.is_disabled(pos) {
                    debug!(%pos, "Ignoring click on disabled cell");
                    return;
                }
                self.focus.focus(pos);
                self.place(pos);
            }
            InputAction::Restart => self.restart(),
            InputAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Places the current mark at `pos` and re-derives focus on success.
    fn place(&mut self, pos: Position) {
        match self.game.try_move(pos.to_index()) {
            Ok(status) => {
                let focus = self.focus.refocus(&self.game, pos);
                debug!(?status, ?focus, "Move accepted");
            }
            Err(e) => debug!(error = %e, "Move rejected"),
        }
    }

    /// Starts a fresh round with focus on the first cell.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.reset();
        self.focus.reset();
    }

    /// Occupied cells and every cell of a finished round are disabled.
    pub fn is_disabled(&self, pos: Position) -> bool {
        !self.game.is_playable(pos)
    }

    /// Whether `pos` is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.game
            .winning_line()
            .is_some_and(|line| line.contains(pos))
    }

    /// Accessible name of whatever holds focus.
    pub fn focus_label(&self) -> String {
        match self.focus.target() {
            FocusTarget::Cell(pos) => pos.cell_label(),
            FocusTarget::Board => "Board".to_string(),
        }
    }

    /// The status line shown under the board.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won { winner, .. } => format!("Player {} wins!", winner),
            GameStatus::Tied => "It's a tie!".to_string(),
            GameStatus::InProgress => format!("Player {}'s turn", self.game.current_player()),
        }
    }
}
