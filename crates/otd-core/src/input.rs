//! # Raw Input Normalization
//!
//! Helpers that turn free-form user text into the values the resolver and
//! calculator consume. None of these fail: text that cannot be interpreted
//! normalizes to an empty string or to zero, and the caller decides whether
//! that is ready to compute.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Number of digits in a US ZIP code.
pub const ZIP_LEN: usize = 5;

/// Remove every character that is not an ASCII digit.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strip non-digits, then keep at most the first five remaining digits.
///
/// The result is never padded, so `"303"` stays `"303"`. A ZIP+4 such as
/// `"30309-1234"` becomes `"30309"`.
pub fn normalize_zip(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(ZIP_LEN)
        .collect()
}

/// Parse a selling price typed with optional grouping and currency symbols.
///
/// Keeps digits and `.` and parses the remainder as a decimal, so
/// `"$21,312.50"` yields `21312.50`. Empty or unparsable text (for
/// instance two decimal points) yields zero.
pub fn parse_price(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}
