//! hotseat: two-player, same-device tic-tac-toe in the terminal.
//!
//! The game rules and keyboard focus logic live in [`hotseat_tictactoe`];
//! this crate is the adapter around them:
//!
//! - **Cli / Settings**: command line and TOML configuration
//! - **Logging**: tracing to a file so the terminal stays clean
//! - **Tui**: event translation, application state, rendering

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod tui;

pub use cli::Cli;
pub use config::{ConfigError, KeyBindings, Settings};
pub use logging::init_logging;
pub use tui::{App, BoardLayout, InputAction, draw, key_action, mouse_action, run};
