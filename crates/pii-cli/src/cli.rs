use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pii-redact")]
#[command(about = "Detect and redact PII in structured records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, global = true, env = "PII_REDACT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Redact a CSV of `record_id,data_json` rows
    Run {
        /// Input CSV (default from config)
        input: Option<PathBuf>,

        /// Output CSV (default from config)
        output: Option<PathBuf>,
    },

    /// Classify a single JSON record
    Scan {
        /// JSON object to classify; read from stdin when omitted
        record: Option<String>,

        /// Show which fields triggered detection
        #[arg(long)]
        explain: bool,
    },

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective config
    Show,

    /// Print the config file path
    Path,

    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
