use anyhow::{Result, bail};
use pii_config::Config;
use std::path::Path;

use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from(path)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Init { force } => init(path, force),
    }
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    println!("✓ Created config: {}", path.display());
    Ok(())
}
