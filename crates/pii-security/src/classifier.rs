//! Two-phase PII detection and record redaction

use crate::patterns::PiiField;
use crate::redactor::redact_value;
use pii_core::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Number of combinatorial fields that must be present together.
const COMBINATORIAL_QUORUM: usize = 2;

/// What was found in a record, before any value is touched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Standalone fields whose value matched their pattern
    pub standalone: BTreeSet<PiiField>,
    /// Combinatorial fields that passed the presence filter, in record order
    pub combinatorial: Vec<PiiField>,
}

impl Detection {
    pub fn quorum_reached(&self) -> bool {
        self.combinatorial.len() >= COMBINATORIAL_QUORUM
    }

    pub fn is_pii(&self) -> bool {
        !self.standalone.is_empty() || self.quorum_reached()
    }

    /// Union of both phases; combinatorial fields count only with quorum.
    pub fn keys_to_redact(&self) -> BTreeSet<PiiField> {
        let mut keys = self.standalone.clone();
        if self.quorum_reached() {
            keys.extend(self.combinatorial.iter().copied());
        }
        keys
    }
}

/// Full result of classifying one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub redacted: Record,
    pub is_pii: bool,
    pub detection: Detection,
}

/// Run both detection phases over a record.
pub fn detect(record: &Record) -> Detection {
    let mut detection = Detection::default();

    // Phase 1: format-valid standalone fields
    for (key, value) in record {
        let Some(field) = PiiField::from_key(key).filter(|f| f.is_standalone()) else {
            continue;
        };
        if value.as_str().is_some_and(|text| field.matches(text)) {
            detection.standalone.insert(field);
        }
    }

    // Phase 2: presence of combinatorial fields, no format check
    for (key, value) in record {
        let Some(field) = PiiField::from_key(key).filter(|f| f.is_combinatorial()) else {
            continue;
        };
        let Some(text) = value.as_str() else {
            continue;
        };
        if is_present(field, text) {
            detection.combinatorial.push(field);
        }
    }

    detection
}

/// Presence filter for combinatorial fields.
///
/// A name only needs an embedded space; the name pattern is not consulted.
fn is_present(field: PiiField, text: &str) -> bool {
    match field {
        PiiField::Name => text.contains(' '),
        PiiField::Address => text.split_whitespace().count() >= 3,
        _ => true,
    }
}

/// Classify a record and build its redacted copy.
pub fn classify(record: &Record) -> Classification {
    let detection = detect(record);
    let mut redacted = record.clone();

    for field in detection.keys_to_redact() {
        let Some(value) = redacted.get_mut(field.as_str()) else {
            continue;
        };
        if let Some(masked) = redact_field(field, value) {
            *value = masked;
        }
    }

    tracing::trace!(
        standalone = ?detection.standalone,
        combinatorial = ?detection.combinatorial,
        "classified record"
    );

    Classification {
        redacted,
        is_pii: detection.is_pii(),
        detection,
    }
}

/// Masked replacement for one flagged value; `None` leaves it untouched.
///
/// Null stays null. Other non-strings are masked via their JSON text.
pub(crate) fn redact_field(field: PiiField, value: &Value) -> Option<Value> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => redact_value(field.as_str(), s),
        other => redact_value(field.as_str(), &other.to_string()),
    };
    Some(Value::String(text))
}

/// Map one record to its redacted copy and whether it contains PII.
///
/// Never fails; values of unexpected type are treated as absent.
pub fn process_record(record: &Record) -> (Record, bool) {
    let Classification {
        redacted, is_pii, ..
    } = classify(record);
    (redacted, is_pii)
}
