use std::io::{self, Write};

use anyhow::{Context, Result};
use chess_features::Analyzer;
use chess_insight::{commands, logging, AppConfig, Cli};
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("invalid configuration")?;
    logging::init(cli.log_level.as_deref(), config.log_filter.as_deref())?;

    let mut analysis = config.analysis;
    cli.apply_overrides(&mut analysis);
    debug!(?analysis, command = ?cli.command, "starting");

    let analyzer = Analyzer::new(analysis);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &analyzer, cli.pretty || config.pretty, &mut out)?;
    out.flush()?;
    Ok(())
}
