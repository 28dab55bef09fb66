//! Magnitude-string conversion
//!
//! Follower and view counts are often written for humans: `"1.2M"`,
//! `"500K"`, `"1,200,000"`. [`convert_to_number`] turns those into `f64`.
//!
//! Rules for textual input:
//! - surrounding whitespace is trimmed and every `,` is removed
//! - a trailing `M` multiplies the prefix by 1,000,000
//! - a trailing `K` multiplies the prefix by 1,000
//! - anything else must parse as a plain decimal number
//!
//! Suffixes are case-sensitive: `"5k"` is not a number.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multiplier for a trailing `M`
pub const MILLION: f64 = 1_000_000.0;

/// Multiplier for a trailing `K`
pub const THOUSAND: f64 = 1_000.0;

/// Error for text that is not a number after normalization
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("'{0}' is not a number")]
    NotNumeric(String),

    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

/// A cell value before conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

/// Convert a raw value to a number
///
/// Numeric values pass through unchanged. Text is normalized by
/// [`parse_magnitude`].
pub fn convert_to_number(value: impl Into<RawValue>) -> Result<f64, ParseError> {
    match value.into() {
        RawValue::Number(n) => Ok(n),
        RawValue::Text(text) => parse_magnitude(&text),
    }
}

/// Parse a magnitude string such as `"1.2M"`, `"500K"` or `"1,200,000"`
pub fn parse_magnitude(text: &str) -> Result<f64, ParseError> {
    let cleaned: String = text.trim().chars().filter(|&c| c != ',').collect();

    let (digits, multiplier) = if let Some(prefix) = cleaned.strip_suffix('M') {
        (prefix, MILLION)
    } else if let Some(prefix) = cleaned.strip_suffix('K') {
        (prefix, THOUSAND)
    } else {
        (cleaned.as_str(), 1.0)
    };

    let value: f64 = digits
        .trim()
        .parse()
        .map_err(|_| ParseError::NotNumeric(text.to_string()))?;

    let scaled = value * multiplier;
    if !scaled.is_finite() {
        return Err(ParseError::NotFinite(text.to_string()));
    }

    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", 42.0)]
    #[case("500K", 500_000.0)]
    #[case("1.2M", 1_200_000.0)]
    #[case("1,200,000", 1_200_000.0)]
    #[case("1,500K", 1_500_000.0)]
    #[case(" 3.5M ", 3_500_000.0)]
    #[case("0", 0.0)]
    #[case("0.25", 0.25)]
    fn test_parse_magnitude(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_magnitude(input).unwrap(), expected, "input: {}", input);
    }

    #[test]
    fn test_separator_and_suffix_agree() {
        let plain = convert_to_number("1,200,000").unwrap();
        let suffixed = convert_to_number("1.2M").unwrap();
        assert_eq!(plain, suffixed);
        assert_eq!(plain, 1_200_000.0);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("M")]
    #[case("5k")]
    #[case("1.2B")]
    #[case("1.2.3")]
    fn test_not_numeric(#[case] input: &str) {
        assert!(matches!(
            parse_magnitude(input),
            Err(ParseError::NotNumeric(_))
        ));
    }

    #[rstest]
    #[case("inf")]
    #[case("NaN")]
    fn test_not_finite(#[case] input: &str) {
        assert!(matches!(parse_magnitude(input), Err(ParseError::NotFinite(_))));
    }

    #[test]
    fn test_numeric_passthrough() {
        assert_eq!(convert_to_number(12.5).unwrap(), 12.5);
        assert_eq!(convert_to_number(7_i64).unwrap(), 7.0);
    }
}
