//! # otd-core: Out-the-Door Price Estimation
//!
//! Estimates what a buyer actually pays for a vehicle: the selling price
//! plus the governing jurisdiction's purchase tax, title fee, registration
//! fee, and a typical dealer fee.
//!
//! Two independent pieces do the work:
//!
//! 1. **[`JurisdictionResolver`]** maps raw ZIP text to the [`FeeSchedule`]
//!    of the jurisdiction that governs it, or to `None` when the input is
//!    incomplete, malformed, or outside every supported range.
//!
//! 2. **[`compute`]** applies a schedule to a selling price and returns a
//!    [`PriceBreakdown`]. It knows nothing about ZIP codes.
//!
//! Schedules and ZIP ranges live in a [`RateTable`]. The built-in table
//! covers Georgia and Texas; alternative tables can be built in code or
//! loaded from YAML and injected into a resolver.
//!
//! ```
//! use otd_core::{compute, resolve};
//! use rust_decimal_macros::dec;
//!
//! let schedule = resolve("30309-1234").expect("Atlanta is in Georgia");
//! let breakdown = compute(dec!(30000), schedule);
//! assert_eq!(breakdown.total, dec!(32977.00));
//! ```
//!
//! ## Crate Policy
//!
//! - Resolution and computation are pure and never fail.
//! - Money is `rust_decimal::Decimal`; no binary floating point.
//! - Errors exist only for rate-table configuration, via `thiserror`.
//! - No `.unwrap()` outside tests.

pub mod calculator;
pub mod error;
pub mod input;
pub mod jurisdiction;
pub mod resolver;
pub mod table;
pub mod zip;

// Re-export primary types for ergonomic imports.
pub use calculator::{compute, compute_with_dealer_fee, PriceBreakdown};
pub use error::{ConfigError, ValidationError};
pub use input::{digits_only, normalize_zip, parse_price};
pub use jurisdiction::{FeeSchedule, JurisdictionCode};
pub use resolver::{resolve, JurisdictionResolver, ZipLookup};
pub use table::{RateTable, RateTableDocument};
pub use zip::{ZipCode, ZipRange};
