//! # ZIP Codes and ZIP Ranges
//!
//! [`ZipCode`] is a validated 5-digit US ZIP code. [`ZipRange`] is a closed
//! interval of ZIP codes assigned to one jurisdiction.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::input::{normalize_zip, ZIP_LEN};
use crate::jurisdiction::JurisdictionCode;

/// Largest numeric value a 5-digit ZIP code can take.
pub const MAX_ZIP: u32 = 99_999;

/// A complete 5-digit ZIP code.
///
/// Leading zeros are significant for display ("02134") but not for range
/// membership, which uses the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZipCode(u32);

impl ZipCode {
    /// Build a ZIP code from raw text using the standard normalization
    /// (strip non-digits, keep the first five).
    ///
    /// Returns `None` if fewer than five digits remain.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let digits = normalize_zip(raw);
        if digits.len() != ZIP_LEN {
            return None;
        }
        digits.parse().ok().map(Self)
    }

    /// Numeric value of the code.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

impl Serialize for ZipCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A closed interval `[low, high]` of ZIP codes mapping to one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRange {
    /// Jurisdiction the range belongs to.
    pub jurisdiction: JurisdictionCode,
    /// Inclusive lower bound.
    pub low: u32,
    /// Inclusive upper bound.
    pub high: u32,
}

impl ZipRange {
    /// Create a range, checking `low <= high <= 99999`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRange`] if the bounds are inverted
    /// or exceed five digits.
    pub fn new(jurisdiction: JurisdictionCode, low: u32, high: u32) -> Result<Self, ValidationError> {
        let range = Self {
            jurisdiction,
            low,
            high,
        };
        range.validate()?;
        Ok(range)
    }

    /// Check the bounds of a range built by hand or deserialized.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.low > self.high || self.high > MAX_ZIP {
            return Err(ValidationError::InvalidRange {
                jurisdiction: self.jurisdiction.to_string(),
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Whether `zip` falls inside the range, bounds included.
    pub fn contains(&self, zip: ZipCode) -> bool {
        (self.low..=self.high).contains(&zip.value())
    }

    /// Whether the two ranges share at least one code.
    pub fn overlaps(&self, other: &ZipRange) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

impl std::fmt::Display for ZipRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:05}-{:05}", self.jurisdiction, self.low, self.high)
    }
}
