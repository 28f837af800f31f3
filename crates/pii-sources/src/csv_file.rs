//! CSV source and sink

use crate::codec::encode_record;
use crate::handler::{RecordSink, RecordSource};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use pii_core::{CoreError, ProcessedRecord, RawRow, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const RECORD_ID_COLUMN: &str = "record_id";
pub const DATA_JSON_COLUMN: &str = "data_json";
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// Reads `record_id` / `data_json` rows from a CSV with a header line.
///
/// Column order is free and extra columns are ignored. Short rows are
/// accepted; a missing `data_json` cell surfaces as `None`.
pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
    record_id_idx: usize,
    data_json_idx: usize,
    row: u64,
    buf: StringRecord,
}

impl CsvSource<File> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> CsvSource<R> {
    /// Wrap a reader and validate the header.
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
        let headers = reader.headers()?.clone();

        let record_id_idx = column_index(&headers, RECORD_ID_COLUMN)?;
        let data_json_idx = column_index(&headers, DATA_JSON_COLUMN)?;

        Ok(Self {
            reader,
            record_id_idx,
            data_json_idx,
            row: 0,
            buf: StringRecord::new(),
        })
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CoreError::MissingColumn(name.to_string()))
}

impl<R: Read> RecordSource for CsvSource<R> {
    fn next_row(&mut self) -> Result<Option<RawRow>> {
        if !self.reader.read_record(&mut self.buf)? {
            return Ok(None);
        }
        self.row += 1;

        let record_id = self.buf.get(self.record_id_idx).unwrap_or_default();
        let data_json = self.buf.get(self.data_json_idx).map(str::to_string);

        Ok(Some(RawRow::new(self.row, record_id, data_json)))
    }
}

/// Writes `record_id, redacted_data_json, is_pii` rows.
///
/// The header is written on construction, so even an empty run leaves a
/// valid file behind. Rows end in CRLF and the flag is `True` / `False`.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(wtr: W) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(wtr);
        writer.write_record(OUTPUT_HEADER)?;
        Ok(Self { writer })
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CoreError::Io(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write(&mut self, record: &ProcessedRecord) -> Result<()> {
        let json = encode_record(&record.redacted)?;
        let flag = if record.is_pii { "True" } else { "False" };
        self.writer
            .write_record([record.record_id.as_str(), json.as_str(), flag])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pii_core::Record;
    use serde_json::json;

    fn drain<R: Read>(source: &mut CsvSource<R>) -> Vec<RawRow> {
        let mut rows = Vec::new();
        while let Some(row) = source.next_row().unwrap() {
            rows.push(row);
        }
        rows
    }

    #[test]
    fn test_reads_rows_in_order() {
        let input = "record_id,data_json\n1,\"{\"\"phone\"\": \"\"9876543210\"\"}\"\n2,{}\n";
        let mut source = CsvSource::from_reader(input.as_bytes()).unwrap();
        let rows = drain(&mut source);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].record_id, "1");
        assert_eq!(rows[0].data_json.as_deref(), Some(r#"{"phone": "9876543210"}"#));
        assert_eq!(rows[1].record_id, "2");
        assert_eq!(rows[1].data_json.as_deref(), Some("{}"));
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let input = "note,data_json,record_id\nx,{},7\n";
        let mut source = CsvSource::from_reader(input.as_bytes()).unwrap();
        let rows = drain(&mut source);

        assert_eq!(rows[0].record_id, "7");
        assert_eq!(rows[0].data_json.as_deref(), Some("{}"));
    }

    #[test]
    fn test_short_row_has_no_payload() {
        let input = "record_id,data_json\n9\n";
        let mut source = CsvSource::from_reader(input.as_bytes()).unwrap();
        let rows = drain(&mut source);

        assert_eq!(rows[0].record_id, "9");
        assert_eq!(rows[0].data_json, None);
    }

    #[test]
    fn test_missing_column() {
        let input = "record_id,payload\n1,{}\n";
        let err = CsvSource::from_reader(input.as_bytes()).err().unwrap();
        assert!(matches!(err, CoreError::MissingColumn(ref c) if c == "data_json"));

        let input = "id,data_json\n1,{}\n";
        let err = CsvSource::from_reader(input.as_bytes()).err().unwrap();
        assert!(matches!(err, CoreError::MissingColumn(ref c) if c == "record_id"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvSource::open(&dir.path().join("nope.csv")).err().unwrap();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_sink_writes_header_and_rows() {
        let mut sink = CsvSink::from_writer(Vec::new()).unwrap();

        let mut redacted = Record::new();
        redacted.insert("phone".to_string(), json!("98XXXXXX10"));
        redacted.insert("amount".to_string(), json!(12));
        sink.write(&ProcessedRecord::new("1", redacted, true)).unwrap();
        sink.write(&ProcessedRecord::new("2", Record::new(), false))
            .unwrap();
        sink.finish().unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "record_id,redacted_data_json,is_pii",
                r#"1,"{""phone"": ""98XXXXXX10"", ""amount"": 12}",True"#,
                "2,{},False",
            ]
        );
        assert!(out.ends_with("\r\n"));
    }

    #[test]
    fn test_empty_sink_still_has_header() {
        let sink = CsvSink::from_writer(Vec::new()).unwrap();
        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(out, "record_id,redacted_data_json,is_pii\r\n");
    }
}
