use anyhow::{Context, Result};
use pii_config::Config;
use std::path::PathBuf;

pub fn handle(input: Option<PathBuf>, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let input = input.unwrap_or_else(|| config.io.input.clone());
    let output = output.unwrap_or_else(|| config.io.output.clone());

    let summary = pii_engine::redact_file(&input, &output)
        .with_context(|| format!("Failed to redact {}", input.display()))?;

    println!("✓ Wrote {}", output.display());
    println!("  Rows read: {}", summary.rows_read);
    println!("  Processed: {}", summary.processed);
    println!("  Skipped:   {}", summary.skipped);
    println!("  PII:       {}", summary.pii);

    Ok(())
}
