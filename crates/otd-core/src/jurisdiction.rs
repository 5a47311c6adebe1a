//! # Jurisdictions and Fee Schedules
//!
//! A jurisdiction is the governing region whose taxes and fees apply to a
//! vehicle purchase. Each supported jurisdiction has exactly one
//! [`FeeSchedule`]: its primary transaction tax rate plus the fixed title,
//! registration, and estimated dealer fees.
//!
//! ## Validation
//!
//! [`JurisdictionCode`] is validated to be non-empty at construction time.
//! [`FeeSchedule::validate`] checks the rate and fee bounds; it is invoked
//! by [`crate::RateTable::new`] for every caller-supplied schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A jurisdiction code, typically a two-letter US state code such as "GA".
///
/// # Validation
///
/// Must be a non-empty string after trimming. Codes are stored as given;
/// comparison is exact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Create a jurisdiction code, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionCode`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidJurisdictionCode);
        }
        Ok(Self(s))
    }

    /// Construct from a compiled-in literal known to be non-empty.
    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_string())
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JurisdictionCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JurisdictionCode> for String {
    fn from(code: JurisdictionCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The tax rate and fixed fees applicable to a vehicle purchase in one
/// jurisdiction.
///
/// Schedules are immutable values. Amounts are exact decimals in US
/// dollars; `tax_rate` is a fraction (0.068 means 6.8%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Jurisdiction this schedule belongs to.
    pub jurisdiction_code: JurisdictionCode,
    /// Display name, e.g. "Georgia".
    pub jurisdiction_name: String,
    /// Label for the primary transaction tax, e.g. "TAVT" or "Sales Tax".
    pub tax_label: String,
    /// Longer helper text shown alongside the tax line.
    #[serde(default)]
    pub tax_description: String,
    /// Tax rate as a fraction in [0, 1).
    pub tax_rate: Decimal,
    /// Fixed title fee.
    pub title_fee: Decimal,
    /// Fixed registration fee.
    pub registration_fee: Decimal,
    /// Typical dealer processing fee. An estimate, not a quoted fee.
    pub dealer_fee_estimate: Decimal,
}

impl FeeSchedule {
    /// Check the rate and fee bounds of this schedule.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::TaxRateOutOfRange`] if `tax_rate` is not in [0, 1).
    /// - [`ValidationError::NegativeFee`] for the first negative fee found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tax_rate.is_sign_negative() || self.tax_rate >= Decimal::ONE {
            return Err(ValidationError::TaxRateOutOfRange {
                jurisdiction: self.jurisdiction_code.to_string(),
                rate: self.tax_rate,
            });
        }

        let fees = [
            ("title_fee", self.title_fee),
            ("registration_fee", self.registration_fee),
            ("dealer_fee_estimate", self.dealer_fee_estimate),
        ];
        for (fee, amount) in fees {
            if amount < Decimal::ZERO {
                return Err(ValidationError::NegativeFee {
                    jurisdiction: self.jurisdiction_code.to_string(),
                    fee,
                    amount,
                });
            }
        }
        Ok(())
    }
}
