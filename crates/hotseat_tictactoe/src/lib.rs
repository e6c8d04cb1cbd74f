//! Two-player, same-device tic-tac-toe engine.
//!
//! Pure state transitions with no rendering side effects:
//!
//! - [`GameState`]: board, player to move, status; move application and
//!   outcome evaluation
//! - [`FocusNavigator`]: keyboard cursor kept on playable cells
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameState, GameStatus, Mark};
//!
//! let mut game = GameState::new();
//! for index in [0, 1, 3, 4, 6] {
//!     assert!(game.apply_move(index));
//! }
//! match game.status() {
//!     GameStatus::Won { winner, line } => {
//!         assert_eq!(winner, Mark::X);
//!         assert_eq!(line.indices(), [0, 3, 6]);
//!     }
//!     other => panic!("expected a win, got {other:?}"),
//! }
//! assert!(!game.apply_move(8));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod focus;
mod game;
mod position;
pub mod rules;
mod types;

pub use focus::{Direction, FocusNavigator, FocusTarget};
pub use game::{GameState, GameStatus, MoveError};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine};
pub use types::{Board, Mark, Square};
