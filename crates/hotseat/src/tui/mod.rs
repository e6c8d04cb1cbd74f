//! Terminal front end: raw terminal events in, rendered board out.

mod app;
mod input;
mod ui;

pub use app::{App, InputAction};
pub use input::{key_action, mouse_action};
pub use ui::{BoardLayout, draw};

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, error, info, instrument};

use crate::config::Settings;

/// Restores the terminal on drop, including on early return and panic unwind.
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on the guard owns cleanup.
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Runs the game until the player quits.
#[instrument(skip_all, fields(mouse = *settings.mouse()))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting hotseat TUI");

    let guard = TerminalGuard::enter(*settings.mouse())?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, settings);

    let _ = terminal.show_cursor();
    drop(guard);

    if let Err(e) = &res {
        error!(error = ?e, "Game loop error");
    }
    res
}

/// Event loop: every event is handled to completion before the next redraw.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, settings: &Settings) -> Result<()> {
    let mut app = App::new();

    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            draw(frame, &app, settings.keys());
        })?;

        if *app.should_quit() {
            info!("Leaving game loop");
            return Ok(());
        }

        let action = match event::read()? {
            Event::Key(key) => key_action(key, settings.keys()),
            Event::Mouse(mouse) => mouse_action(mouse, &BoardLayout::new(area)),
            _ => None,
        };
        if let Some(action) = action {
            app.handle(action);
        }
    }
}
