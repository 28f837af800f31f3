pub mod config;
pub mod run;
pub mod scan;

use anyhow::Result;
use pii_config::Config;
use std::path::Path;

use crate::cli::Commands;

/// Route a parsed command. The config file is only read by commands that use it.
pub fn dispatch(command: Commands, config_path: &Path) -> Result<()> {
    match command {
        Commands::Run { input, output } => {
            let config = Config::load_from(config_path)?;
            run::handle(input, output, &config)
        }
        Commands::Scan { record, explain } => scan::handle(record, explain),
        Commands::Config(config_cmd) => config::handle(config_cmd, config_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ConfigCommands;

    #[test]
    fn test_init_force_repairs_unparsable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_filter = [").unwrap();

        dispatch(Commands::Config(ConfigCommands::Path), &path).unwrap();
        dispatch(Commands::Config(ConfigCommands::Init { force: true }), &path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_commands_needing_config_report_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_filter = [").unwrap();

        let err = dispatch(Commands::Config(ConfigCommands::Show), &path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let err = dispatch(
            Commands::Run {
                input: None,
                output: None,
            },
            &path,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
