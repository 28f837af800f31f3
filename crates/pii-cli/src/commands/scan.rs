use anyhow::{Context, Result};
use pii_security::classify;
use pii_sources::decode_record;
use serde_json::{Value, json};
use std::io;

pub fn handle(record: Option<String>, explain: bool) -> Result<()> {
    let text = match record {
        Some(text) => text,
        None => io::read_to_string(io::stdin()).context("Failed to read record from stdin")?,
    };

    let report = scan(&text, explain)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn scan(text: &str, explain: bool) -> Result<Value> {
    let record = decode_record(text.trim()).context("Invalid record")?;
    let classification = classify(&record);

    let mut report = json!({
        "redacted": classification.redacted,
        "is_pii": classification.is_pii,
    });
    if explain {
        report["detection"] = json!({
            "standalone": classification.detection.standalone,
            "combinatorial": classification.detection.combinatorial,
            "quorum_reached": classification.detection.quorum_reached(),
        });
    }
    Ok(report)
}
