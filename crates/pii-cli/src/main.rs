mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use pii_config::Config;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // A broken config must not block `config init`; fall back to the default filter
    let log_filter = Config::load_from(&config_path)
        .map(|config| config.log_filter)
        .unwrap_or_else(|_| Config::default().log_filter);

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::dispatch(cli.command, &config_path)
}
