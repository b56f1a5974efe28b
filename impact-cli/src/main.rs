use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use impact_cli::{AppConfig, Cli, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        AppConfig::load_optional(cli.config.as_deref()).context("Failed to load config")?;

    logging::init_logging(
        config.log_level(cli.log_level.as_deref()),
        config.log_file.as_deref(),
    )?;

    let session = config
        .session(&cli.session_overrides())
        .context("Failed to apply multiplier settings")?;
    debug!(
        categories = session.multipliers().len(),
        require_brand = session.policy().require_brand,
        "session ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    impact_cli::run(&cli, session, &mut out)?;
    out.flush()?;

    Ok(())
}
