//! PII classification and redaction engine
//!
//! `process_record` maps one record to `(redacted record, is_pii)`.
//! Detection runs in two phases: standalone fields (valid on their own)
//! and combinatorial fields (sensitive only when two or more are present).

pub mod classifier;
pub mod patterns;
pub mod redactor;

pub use classifier::{Classification, Detection, classify, detect, process_record};
pub use patterns::{PiiField, is_valid};
pub use redactor::{
    redact_aadhar, redact_email, redact_generic, redact_name, redact_passport, redact_phone,
    redact_value,
};
