pub mod codec;
pub mod csv_file;
pub mod handler;

pub use codec::{CompatFormatter, decode_record, encode_record};
pub use csv_file::{CsvSink, CsvSource, DATA_JSON_COLUMN, OUTPUT_HEADER, RECORD_ID_COLUMN};
pub use handler::{RecordSink, RecordSource};
