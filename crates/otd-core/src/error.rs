//! # Error Hierarchy
//!
//! Structured error types for the estimator core, built with `thiserror`.
//!
//! Resolution and price computation never fail: an unknown or malformed
//! ZIP code is an ordinary `None`, and the calculator is total. Errors only
//! arise at the configuration boundary, when a rate table is assembled from
//! caller-supplied data or loaded from a file.

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

/// Validation errors for fee schedules and ZIP range tables.
///
/// Each variant carries the offending input so a misconfigured rate file
/// can be fixed without guesswork.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Jurisdiction code is empty.
    #[error("invalid jurisdiction code: must be non-empty")]
    InvalidJurisdictionCode,

    /// Tax rate is outside the half-open interval [0, 1).
    #[error("tax rate {rate} for {jurisdiction} is outside [0, 1)")]
    TaxRateOutOfRange {
        /// Jurisdiction whose schedule carries the rate.
        jurisdiction: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// A fixed fee is negative.
    #[error("{fee} for {jurisdiction} must be non-negative, got {amount}")]
    NegativeFee {
        /// Jurisdiction whose schedule carries the fee.
        jurisdiction: String,
        /// Which fee was rejected (e.g. "title_fee").
        fee: &'static str,
        /// The rejected amount.
        amount: Decimal,
    },

    /// Two schedules claim the same jurisdiction code.
    #[error("duplicate fee schedule for jurisdiction {0}")]
    DuplicateJurisdiction(String),

    /// Range bounds are inverted or not 5-digit ZIP values.
    #[error("invalid ZIP range {low}-{high} for {jurisdiction} (expected low <= high <= 99999)")]
    InvalidRange {
        /// Jurisdiction the range maps to.
        jurisdiction: String,
        /// Lower bound.
        low: u32,
        /// Upper bound.
        high: u32,
    },

    /// Range refers to a jurisdiction with no fee schedule.
    #[error("ZIP range {low}-{high} refers to unknown jurisdiction {jurisdiction}")]
    UnknownJurisdiction {
        /// The unknown jurisdiction code.
        jurisdiction: String,
        /// Lower bound.
        low: u32,
        /// Upper bound.
        high: u32,
    },

    /// Two ranges share at least one ZIP code.
    #[error("ZIP range {first} overlaps {second}")]
    OverlappingRanges {
        /// Display form of the first range, e.g. "GA 30001-31999".
        first: String,
        /// Display form of the second range.
        second: String,
    },
}

/// Errors loading a rate table from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The rate table file does not exist.
    #[error("rate table not found: {}", .path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Reading the file failed.
    #[error("failed to read rate table at {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// YAML parsing failed.
    #[error("failed to parse rate table YAML{}: {source}", display_path(.path))]
    YamlParse {
        /// Source file, if the document came from disk.
        path: Option<PathBuf>,
        /// Underlying parser error.
        source: serde_yaml::Error,
    },

    /// The document parsed but describes an invalid table.
    #[error("invalid rate table{}: {source}", display_path(.path))]
    Invalid {
        /// Source file, if the document came from disk.
        path: Option<PathBuf>,
        /// The validation failure.
        source: ValidationError,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}
