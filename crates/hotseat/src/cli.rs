//! Command-line interface for hotseat.

use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use crate::config::{ConfigError, Settings};

/// Two-player tic-tac-toe on one keyboard and mouse
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player same-device tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Loads the settings file and applies command-line overrides.
    #[instrument(skip(self), fields(config = %self.config.display()))]
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = Settings::load(&self.config)?;
        if let Some(path) = &self.log_file {
            settings = settings.with_log_file(path.clone());
        }
        if self.no_mouse {
            settings = settings.with_mouse(false);
        }
        Ok(settings)
    }
}
