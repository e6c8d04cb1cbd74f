//! hotseat - two players, one terminal.

use anyhow::{Context, Result};
use clap::Parser;
use hotseat::{Cli, init_logging, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG may be set there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.settings().context("Failed to load settings")?;

    if cli.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    init_logging(&settings)?;
    info!(config = %cli.config.display(), "Settings loaded");

    run(&settings)
}
