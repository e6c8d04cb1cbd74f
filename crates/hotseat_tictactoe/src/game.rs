//! Game state engine: move validation, turn alternation, outcome evaluation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::position::Position;
use crate::rules::{WinLine, check_winner, is_full};
use crate::types::{Board, Mark, Square};

/// Current status of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A line was completed. Terminal until reset.
    Won {
        /// Owner of the completed line.
        winner: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// Board filled with no completed line. Terminal until reset.
    Tied,
}

impl GameStatus {
    /// True for `Won` and `Tied`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(not(source))] usize),
    /// The square already holds a mark.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),
    /// The round has ended.
    #[display("Game is already over")]
    GameOver,
}

/// Complete state of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    status: GameStatus,
    history: Vec<Position>,
}

impl GameState {
    /// Creates a fresh round: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the winner's mark once the round is won).
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Positions played this round, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// The completed line, if the round is won.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// True once the round is won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Whether a mark may be placed at `pos` right now.
    pub fn is_playable(&self, pos: Position) -> bool {
        !self.is_over() && self.board.is_empty(pos)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Returns `false` and leaves the state untouched when the round is over,
    /// the index is outside 0-8, or the cell is occupied.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        self.try_move(index).is_ok()
    }

    /// Places the current player's mark at `index`, reporting why a move was
    /// rejected.
    ///
    /// On success returns the status after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round has ended
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8
    /// - [`MoveError::SquareOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            debug!(index, "Move rejected: game over");
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(pos) {
            debug!(%pos, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.current_player));
        self.history.push(pos);

        self.status = self.evaluate_outcome();
        match self.status {
            GameStatus::InProgress => {
                self.current_player = self.current_player.opponent();
                debug!(%pos, next = %self.current_player, "Move applied");
            }
            GameStatus::Won { winner, line } => {
                info!(%winner, line = ?line.indices(), "Round won");
            }
            GameStatus::Tied => info!("Round tied"),
        }
        Ok(self.status)
    }

    /// Evaluates the board: first completed line in [`WIN_LINES`](crate::WIN_LINES)
    /// order, else `Tied` on a full board, else `InProgress`.
    #[instrument(skip(self))]
    pub fn evaluate_outcome(&self) -> GameStatus {
        if let Some((winner, line)) = check_winner(&self.board) {
            GameStatus::Won { winner, line }
        } else if is_full(&self.board) {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Starts a fresh round. Valid in any state.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        info!("Resetting round");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
