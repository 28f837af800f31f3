//! Field-specific masking strategies
//!
//! All transforms count characters, not bytes, so multi-byte input is
//! never split mid-character.

use crate::patterns::PiiField;

/// Redact a value using the strategy registered for `key`.
///
/// Fields without a dedicated strategy get the generic placeholder.
pub fn redact_value(key: &str, value: &str) -> String {
    match PiiField::from_key(key) {
        Some(PiiField::Phone) => redact_phone(value),
        Some(PiiField::Aadhar) => redact_aadhar(value),
        Some(PiiField::Passport) => redact_passport(value),
        Some(PiiField::Email) => redact_email(value),
        Some(PiiField::Name) => redact_name(value),
        _ => redact_generic(key),
    }
}

/// `9876543210` -> `98XXXXXX10`
pub fn redact_phone(phone: &str) -> String {
    format!("{}XXXXXX{}", head(phone, 2), tail(phone, 2))
}

/// `123456789012` -> `XXXXXXXX9012`
pub fn redact_aadhar(aadhar: &str) -> String {
    format!("XXXXXXXX{}", tail(aadhar, 4))
}

/// `A1234567` -> `AXXXXX67`
pub fn redact_passport(passport: &str) -> String {
    format!("{}XXXXX{}", head(passport, 1), tail(passport, 2))
}

/// Mask the local part of an address, keeping the domain.
pub fn redact_email(email: &str) -> String {
    let Some((user, domain)) = email.split_once('@') else {
        return "[REDACTED_EMAIL]".to_string();
    };

    let len = user.chars().count();
    if len > 2 {
        format!(
            "{}{}{}@{}",
            head(user, 1),
            "*".repeat(len - 2),
            tail(user, 1),
            domain
        )
    } else {
        format!("{}*@{}", head(user, 1), domain)
    }
}

/// `Jane Doe` -> `J*** D**`
pub fn redact_name(name: &str) -> String {
    name.split_whitespace()
        .map(|part| {
            let len = part.chars().count();
            format!("{}{}", head(part, 1), "*".repeat(len.saturating_sub(1)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `device_id` -> `[REDACTED_DEVICE_ID]`
pub fn redact_generic(key: &str) -> String {
    format!("[REDACTED_{}]", key.to_uppercase())
}

fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn tail(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    if len <= n {
        return s;
    }
    match s.char_indices().nth(len - n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}
