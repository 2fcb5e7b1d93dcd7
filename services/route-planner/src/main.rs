//! Route planner command-line entry point.

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use route_planner::cli::Cli;
use route_planner::config::PlannerConfig;
use route_planner::data::load_database;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json)?;

    let mut config = PlannerConfig::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    debug!(?config, "Effective configuration");

    let db = load_database(&config.data)?;
    let output = route_planner::run(&cli.command, &config, &db)?;
    println!("{}", output);
    Ok(())
}

/// Logs go to stderr so command output can be piped.
fn init_tracing(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow!(e))
}
