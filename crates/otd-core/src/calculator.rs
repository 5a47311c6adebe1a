//! # Price Calculator
//!
//! Turns a selling price and a [`FeeSchedule`] into a [`PriceBreakdown`]:
//!
//! ```text
//! sales_tax = selling_price * tax_rate
//! total     = selling_price + sales_tax + title_fee + registration_fee + dealer_fee
//! ```
//!
//! ## Determinism
//!
//! The calculator is a total function. It does not round, validate, or
//! fail; a zero or negative price is computed like any other. Deciding
//! whether a breakdown is worth showing (positive price, resolved ZIP) is
//! up to the caller. Arithmetic is exact decimal, so identical inputs give
//! identical outputs and the documented examples hold to the cent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::jurisdiction::FeeSchedule;

/// Itemized out-the-door cost for one calculation.
///
/// A snapshot: created per call and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Selling price the calculation started from.
    pub selling_price: Decimal,
    /// Tax rate applied, as a fraction.
    pub tax_rate: Decimal,
    /// `selling_price * tax_rate`, unrounded.
    pub sales_tax: Decimal,
    /// Title fee from the schedule.
    pub title_fee: Decimal,
    /// Registration fee from the schedule.
    pub registration_fee: Decimal,
    /// Dealer fee: the caller's override, or the schedule's estimate.
    pub dealer_fee: Decimal,
    /// Sum of the price, tax, and all fees.
    pub total: Decimal,
}

/// Compute the breakdown using the schedule's dealer fee estimate.
pub fn compute(selling_price: Decimal, schedule: &FeeSchedule) -> PriceBreakdown {
    compute_with_dealer_fee(selling_price, schedule, None)
}

/// Compute the breakdown, optionally replacing the schedule's dealer fee
/// estimate with a caller-supplied amount.
///
/// The schedule itself is never modified.
pub fn compute_with_dealer_fee(
    selling_price: Decimal,
    schedule: &FeeSchedule,
    dealer_fee_override: Option<Decimal>,
) -> PriceBreakdown {
    let dealer_fee = dealer_fee_override.unwrap_or(schedule.dealer_fee_estimate);
    let sales_tax = selling_price * schedule.tax_rate;
    let total = selling_price + sales_tax + schedule.title_fee + schedule.registration_fee + dealer_fee;

    PriceBreakdown {
        selling_price,
        tax_rate: schedule.tax_rate,
        sales_tax,
        title_fee: schedule.title_fee,
        registration_fee: schedule.registration_fee,
        dealer_fee,
        total,
    }
}
