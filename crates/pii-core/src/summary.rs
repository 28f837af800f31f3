use serde::{Deserialize, Serialize};
use std::fmt;

/// Counters for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub rows_read: u64,
    pub processed: u64,
    pub skipped: u64,
    pub pii: u64,
}

impl RunSummary {
    pub fn record_processed(&mut self, is_pii: bool) {
        self.rows_read += 1;
        self.processed += 1;
        if is_pii {
            self.pii += 1;
        }
    }

    pub fn record_skipped(&mut self) {
        self.rows_read += 1;
        self.skipped += 1;
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows read: {}, processed: {}, skipped: {}, pii: {}",
            self.rows_read, self.processed, self.skipped, self.pii
        )
    }
}
