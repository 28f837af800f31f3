//! Source and sink traits

use pii_core::{ProcessedRecord, RawRow, Result};

/// Anything that yields input rows in order
pub trait RecordSource {
    /// Next row, or `None` once the input is exhausted
    fn next_row(&mut self) -> Result<Option<RawRow>>;
}

/// Anything that persists classified rows
pub trait RecordSink {
    fn write(&mut self, record: &ProcessedRecord) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()>;
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn next_row(&mut self) -> Result<Option<RawRow>> {
        (**self).next_row()
    }
}

impl<T: RecordSink + ?Sized> RecordSink for Box<T> {
    fn write(&mut self, record: &ProcessedRecord) -> Result<()> {
        (**self).write(record)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl RecordSink for Vec<ProcessedRecord> {
    fn write(&mut self, record: &ProcessedRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
