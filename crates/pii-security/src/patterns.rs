use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

macro_rules! field_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// All patterns are anchored: a value must match in full.
field_pattern!(RE_PHONE, r"^\d{10}$");
field_pattern!(RE_AADHAR, r"^\d{12}$");
field_pattern!(RE_PASSPORT, r"^[A-Z][0-9]{7}$");
field_pattern!(RE_UPI_ID, r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+$");
field_pattern!(
    RE_EMAIL,
    r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$"
);
// No octet range check: 999.999.999.999 is accepted.
field_pattern!(RE_IP_ADDRESS, r"^(?:\d{1,3}\.){3}\d{1,3}$");
field_pattern!(RE_NAME, r"^[A-Z][a-z]+(?: [A-Z][a-z]+)+$");

/// Field names the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiField {
    Phone,
    Aadhar,
    Passport,
    UpiId,
    Email,
    IpAddress,
    Name,
    Address,
    DeviceId,
}

impl PiiField {
    /// Fields that flag a record on their own when format-valid
    pub const STANDALONE: [PiiField; 4] = [
        PiiField::Phone,
        PiiField::Aadhar,
        PiiField::Passport,
        PiiField::UpiId,
    ];

    /// Fields that only flag a record together with another one of the same set
    pub const COMBINATORIAL: [PiiField; 5] = [
        PiiField::Name,
        PiiField::Email,
        PiiField::Address,
        PiiField::IpAddress,
        PiiField::DeviceId,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "phone" => Some(Self::Phone),
            "aadhar" => Some(Self::Aadhar),
            "passport" => Some(Self::Passport),
            "upi_id" => Some(Self::UpiId),
            "email" => Some(Self::Email),
            "ip_address" => Some(Self::IpAddress),
            "name" => Some(Self::Name),
            "address" => Some(Self::Address),
            "device_id" => Some(Self::DeviceId),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Aadhar => "aadhar",
            Self::Passport => "passport",
            Self::UpiId => "upi_id",
            Self::Email => "email",
            Self::IpAddress => "ip_address",
            Self::Name => "name",
            Self::Address => "address",
            Self::DeviceId => "device_id",
        }
    }

    pub fn is_standalone(self) -> bool {
        Self::STANDALONE.contains(&self)
    }

    pub fn is_combinatorial(self) -> bool {
        Self::COMBINATORIAL.contains(&self)
    }

    /// Validation pattern for this field, if it has one.
    ///
    /// `address` and `device_id` have no fixed format.
    pub fn pattern(self) -> Option<&'static Regex> {
        let pattern = match self {
            Self::Phone => &RE_PHONE,
            Self::Aadhar => &RE_AADHAR,
            Self::Passport => &RE_PASSPORT,
            Self::UpiId => &RE_UPI_ID,
            Self::Email => &RE_EMAIL,
            Self::IpAddress => &RE_IP_ADDRESS,
            Self::Name => &RE_NAME,
            Self::Address | Self::DeviceId => return None,
        };
        LazyLock::force(pattern).as_ref()
    }

    /// Full-string match of `value` against this field's pattern.
    pub fn matches(self, value: &str) -> bool {
        self.pattern().is_some_and(|re| re.is_match(value))
    }
}

impl fmt::Display for PiiField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a record value against the pattern registered for `key`.
///
/// Non-string values and keys without a pattern never match.
pub fn is_valid(key: &str, value: &Value) -> bool {
    match (PiiField::from_key(key), value.as_str()) {
        (Some(field), Some(text)) => field.matches(text),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_patterns_compile() {
        for field in [
            PiiField::Phone,
            PiiField::Aadhar,
            PiiField::Passport,
            PiiField::UpiId,
            PiiField::Email,
            PiiField::IpAddress,
            PiiField::Name,
        ] {
            assert!(field.pattern().is_some(), "pattern for {field} failed to compile");
        }
        assert!(PiiField::Address.pattern().is_none());
        assert!(PiiField::DeviceId.pattern().is_none());
    }

    #[test]
    fn test_key_round_trip() {
        for field in PiiField::STANDALONE.iter().chain(PiiField::COMBINATORIAL.iter()) {
            assert_eq!(PiiField::from_key(field.as_str()), Some(*field));
        }
        assert_eq!(PiiField::from_key("order_value"), None);
        assert_eq!(PiiField::from_key("Phone"), None);
    }

    #[test]
    fn test_key_sets_are_disjoint() {
        for field in PiiField::STANDALONE {
            assert!(field.is_standalone());
            assert!(!field.is_combinatorial());
        }
        for field in PiiField::COMBINATORIAL {
            assert!(field.is_combinatorial());
            assert!(!field.is_standalone());
        }
    }

    #[test]
    fn test_phone() {
        assert!(PiiField::Phone.matches("9876543210"));
        assert!(!PiiField::Phone.matches("987654321"));
        assert!(!PiiField::Phone.matches("98765432101"));
        assert!(!PiiField::Phone.matches("98765-43210"));
        assert!(!PiiField::Phone.matches("+919876543210"));
    }

    #[test]
    fn test_aadhar() {
        assert!(PiiField::Aadhar.matches("123456789012"));
        assert!(!PiiField::Aadhar.matches("1234 5678 9012"));
        assert!(!PiiField::Aadhar.matches("12345678901"));
    }

    #[test]
    fn test_passport() {
        assert!(PiiField::Passport.matches("A1234567"));
        assert!(!PiiField::Passport.matches("a1234567"));
        assert!(!PiiField::Passport.matches("AB123456"));
        assert!(!PiiField::Passport.matches("A12345678"));
    }

    #[test]
    fn test_upi_id() {
        assert!(PiiField::UpiId.matches("user@okaxis"));
        assert!(PiiField::UpiId.matches("first.last+tag@bank.in"));
        assert!(!PiiField::UpiId.matches("user@"));
        assert!(!PiiField::UpiId.matches("no-at-sign"));
    }

    #[test]
    fn test_email() {
        assert!(PiiField::Email.matches("jane@x.com"));
        assert!(PiiField::Email.matches("j.doe+news@mail.example.org"));
        assert!(!PiiField::Email.matches("jane@localhost"));
        assert!(!PiiField::Email.matches("jane@x.c"));
        assert!(!PiiField::Email.matches("j**e@x.com"));
    }

    #[test]
    fn test_ip_address_has_no_range_check() {
        assert!(PiiField::IpAddress.matches("192.168.1.1"));
        assert!(PiiField::IpAddress.matches("999.999.999.999"));
        assert!(!PiiField::IpAddress.matches("1.2.3"));
        assert!(!PiiField::IpAddress.matches("1.2.3.4444"));
    }

    #[test]
    fn test_name() {
        assert!(PiiField::Name.matches("Jane Doe"));
        assert!(PiiField::Name.matches("Mary Ann Smith"));
        assert!(!PiiField::Name.matches("Jane"));
        assert!(!PiiField::Name.matches("jane doe"));
        assert!(!PiiField::Name.matches("Jane  Doe"));
        assert!(!PiiField::Name.matches("JANE DOE"));
    }

    #[test]
    fn test_is_valid_ignores_non_strings() {
        assert!(is_valid("phone", &json!("9876543210")));
        assert!(!is_valid("phone", &json!(9876543210u64)));
        assert!(!is_valid("phone", &json!(null)));
        assert!(!is_valid("phone", &json!(["9876543210"])));
        assert!(!is_valid("address", &json!("1 Main Street")));
        assert!(!is_valid("unknown", &json!("9876543210")));
    }
}
