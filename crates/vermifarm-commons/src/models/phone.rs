//! Validated phone number wrapper.

use crate::errors::CommonError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated Vermi-Farm subscriber phone number.
///
/// Accepted numbers are ten digits starting with `07` or `01` (the two local
/// mobile prefixes), e.g. `0712345678`. [`PhoneNumber::parse`] is the only
/// constructor, so holding a `PhoneNumber` implies the format check already
/// passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and validate a raw phone number string.
    ///
    /// Surrounding whitespace is trimmed; everything else must match
    /// `0[17]` followed by exactly eight digits.
    pub fn parse(raw: &str) -> Result<Self, CommonError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(CommonError::invalid_input(format!(
                "Phone number must match 0[17]xxxxxxxx, got '{}'",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Check a candidate without allocating.
    pub fn is_valid(candidate: &str) -> bool {
        let bytes = candidate.as_bytes();
        bytes.len() == 10
            && bytes[0] == b'0'
            && (bytes[1] == b'7' || bytes[1] == b'1')
            && bytes[2..].iter().all(|b| b.is_ascii_digit())
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = CommonError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PhoneNumber> for String {
    fn from(p: PhoneNumber) -> Self {
        p.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_local_prefixes() {
        assert!(PhoneNumber::parse("0712345678").is_ok());
        assert!(PhoneNumber::parse("0112345678").is_ok());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let phone = PhoneNumber::parse("  0712345678 ").unwrap();
        assert_eq!(phone.as_str(), "0712345678");
    }

    #[test]
    fn rejects_bad_prefix_length_and_characters() {
        for bad in [
            "0812345678",  // prefix not 07/01
            "071234567",   // too short
            "07123456789", // too long
            "07123a5678",  // non-digit
            "+254712345678",
            "",
        ] {
            assert!(PhoneNumber::parse(bad).is_err(), "expected rejection: {:?}", bad);
        }
    }
}
