use pii_core::{ProcessedRecord, RawRow, Result, RunSummary};
use pii_security::process_record;
use pii_sources::{CsvSink, CsvSource, RecordSink, RecordSource, decode_record};
use std::path::Path;

/// Drives rows from a source through the classifier into a sink.
///
/// A row whose payload cannot be decoded is skipped and never reaches the
/// classifier. Source and sink errors abort the run.
pub struct Pipeline<S, K> {
    source: S,
    sink: K,
}

impl<S: RecordSource, K: RecordSink> Pipeline<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        while let Some(row) = self.source.next_row()? {
            match process_row(&row) {
                Some(processed) => {
                    self.sink.write(&processed)?;
                    summary.record_processed(processed.is_pii);
                }
                None => summary.record_skipped(),
            }
        }

        self.sink.finish()?;
        tracing::info!(
            rows_read = summary.rows_read,
            processed = summary.processed,
            skipped = summary.skipped,
            pii = summary.pii,
            "Batch complete"
        );
        Ok(summary)
    }

    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }
}

/// Decode and classify a single row. `None` means the row is skipped.
pub fn process_row(row: &RawRow) -> Option<ProcessedRecord> {
    let Some(payload) = row.data_json.as_deref() else {
        tracing::warn!(row = row.row, record_id = %row.record_id, "Skipping row without data_json");
        return None;
    };

    let record = match decode_record(payload) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(row = row.row, record_id = %row.record_id, "Skipping malformed payload: {}", e);
            return None;
        }
    };

    let (redacted, is_pii) = process_record(&record);
    tracing::debug!(row = row.row, record_id = %row.record_id, is_pii, "Processed row");
    Some(ProcessedRecord::new(row.record_id.clone(), redacted, is_pii))
}

/// Redact a CSV file into another CSV file.
///
/// The input header is validated before the output file is created, so a
/// bad input never leaves an empty output behind.
pub fn redact_file(input: &Path, output: &Path) -> Result<RunSummary> {
    tracing::info!(input = %input.display(), output = %output.display(), "Starting batch");

    let source = CsvSource::open(input)?;
    let sink = CsvSink::create(output)?;
    Pipeline::new(source, sink).run()
}
