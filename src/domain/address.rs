use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address must be 0x followed by 40 hex characters")]
    InvalidFormat,
}

/// An EVM-style pair address: `0x` followed by exactly 40 hex digits.
///
/// The original casing is preserved for display and export; comparisons
/// that matter (list uniqueness) go through [`PairAddress::matches`],
/// which is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairAddress(String);

impl PairAddress {
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let raw = raw.trim();
        let hex = raw.strip_prefix("0x").ok_or(AddressError::InvalidFormat)?;
        if hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(AddressError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive equality, the identity used for list uniqueness.
    pub fn matches(&self, other: &PairAddress) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for PairAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PairAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: &str = "0x0000000000000000000000000000000000000000";

    #[test]
    fn parses_valid_address() {
        let addr = PairAddress::parse(ZERO).unwrap();
        assert_eq!(addr.as_str(), ZERO);
    }

    #[test]
    fn preserves_original_casing() {
        let mixed = "0xAbCdEf1234567890aBcDeF1234567890ABCDEF12";
        let addr = PairAddress::parse(mixed).unwrap();
        assert_eq!(addr.as_str(), mixed);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let addr = PairAddress::parse(&format!("  {ZERO}  ")).unwrap();
        assert_eq!(addr.as_str(), ZERO);
    }

    #[test]
    fn rejects_missing_prefix() {
        let no_prefix = &ZERO[2..];
        assert_eq!(
            PairAddress::parse(no_prefix),
            Err(AddressError::InvalidFormat)
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(PairAddress::parse("0x123").is_err());
        assert!(PairAddress::parse(&format!("{ZERO}0")).is_err());
        assert!(PairAddress::parse("0x").is_err());
        assert!(PairAddress::parse("").is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        let bad = "0xzz00000000000000000000000000000000000000";
        assert!(PairAddress::parse(bad).is_err());
    }

    #[test]
    fn matches_is_case_insensitive() {
        let lower = PairAddress::parse("0xabcdefabcdefabcdefabcdefabcdefabcdefabcd").unwrap();
        let upper = PairAddress::parse("0xABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD").unwrap();
        assert!(lower.matches(&upper));
        assert_ne!(lower, upper);
    }

    #[test]
    fn from_str_round_trip() {
        let addr: PairAddress = ZERO.parse().unwrap();
        assert_eq!(addr.to_string(), ZERO);
    }
}
