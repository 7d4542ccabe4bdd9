use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static HEXIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Fa-f]+$").expect("heximal pattern is a valid regex")
});

/// A non-empty string of hex digits: no sign, no `0x` prefix, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexNumeral(String);

impl HexNumeral {
    pub fn is_heximal(candidate: &str) -> bool {
        HEXIMAL_PATTERN.is_match(candidate)
    }

    /// Returns `None` when `candidate` is not a heximal numeral.
    pub fn parse(candidate: &str) -> Option<Self> {
        Self::is_heximal(candidate).then(|| Self(candidate.to_string()))
    }

    /// Signed 64-bit value of the numeral, saturating at `i64::MAX` when it
    /// does not fit.
    pub fn value(&self) -> i64 {
        // The pattern guarantees digits only, so overflow is the sole failure.
        i64::from_str_radix(&self.0, 16).unwrap_or(i64::MAX)
    }

    /// Lowercase hex rendering of `value`; negative values get a leading `-`.
    pub fn encode(value: i64) -> String {
        if value < 0 {
            format!("-{:x}", value.unsigned_abs())
        } else {
            format!("{:x}", value)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
