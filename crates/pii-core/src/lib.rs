//! Core domain models for pii-redact
//!
//! This crate contains:
//! - Record model (the JSON mapping the classifier works on)
//! - Row and output models shared by sources, sinks and the batch driver
//! - Run summary and the shared error type

pub mod error;
pub mod record;
pub mod summary;

pub use error::{CoreError, Result};
pub use record::{ProcessedRecord, RawRow, Record};
pub use summary::RunSummary;
