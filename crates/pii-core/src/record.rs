use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single structured record: field name to JSON value, in input order.
pub type Record = Map<String, Value>;

/// One input row before its payload has been decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-indexed data row number (header excluded)
    pub row: u64,
    pub record_id: String,
    /// Raw `data_json` cell; `None` when the row is too short to carry it
    pub data_json: Option<String>,
}

impl RawRow {
    pub fn new(row: u64, record_id: impl Into<String>, data_json: Option<String>) -> Self {
        Self {
            row,
            record_id: record_id.into(),
            data_json,
        }
    }
}

/// A classified row, ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub record_id: String,
    pub redacted: Record,
    pub is_pii: bool,
}

impl ProcessedRecord {
    pub fn new(record_id: impl Into<String>, redacted: Record, is_pii: bool) -> Self {
        Self {
            record_id: record_id.into(),
            redacted,
            is_pii,
        }
    }
}
