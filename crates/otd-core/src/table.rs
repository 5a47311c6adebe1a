//! # Rate Table
//!
//! The [`RateTable`] pairs every supported jurisdiction's [`FeeSchedule`]
//! with the ZIP ranges that map to it. It is plain configuration: built
//! once, read-only afterwards, and passed to the resolver by reference so
//! callers and tests can inject their own table.
//!
//! ## Built-in table
//!
//! [`RateTable::builtin`] returns the compiled-in table covering Georgia
//! and Texas:
//!
//! | Jurisdiction | Tax | Rate | Title | Registration | Dealer (est.) | ZIP ranges |
//! |---|---|---|---|---|---|---|
//! | GA | TAVT | 6.8% | $18 | $20 | $899 | 30001–31999, 39801–39901 |
//! | TX | Sales Tax | 6.25% | $33 | $90 | $199 | 73301–73399, 75001–79999, 88501–88595 |
//!
//! ## Invariants
//!
//! - At most one schedule per jurisdiction code.
//! - Every range refers to a jurisdiction that has a schedule.
//! - No two ranges overlap. Ranges are stored sorted by lower bound, so
//!   lookup is a binary search.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValidationError};
use crate::jurisdiction::{FeeSchedule, JurisdictionCode};
use crate::zip::{ZipCode, ZipRange};

/// On-disk shape of a rate table, used for YAML/JSON (de)serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTableDocument {
    /// One schedule per jurisdiction.
    pub schedules: Vec<FeeSchedule>,
    /// ZIP ranges, in any order.
    pub ranges: Vec<ZipRange>,
}

/// Validated set of fee schedules and the ZIP ranges that select them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    schedules: BTreeMap<JurisdictionCode, FeeSchedule>,
    ranges: Vec<ZipRange>,
}

static BUILTIN: OnceLock<RateTable> = OnceLock::new();

impl RateTable {
    /// Build a table from caller-supplied schedules and ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: an invalid schedule, a
    /// duplicate jurisdiction, an invalid range, a range naming an unknown
    /// jurisdiction, or two overlapping ranges.
    pub fn new(schedules: Vec<FeeSchedule>, ranges: Vec<ZipRange>) -> Result<Self, ValidationError> {
        let mut by_code = BTreeMap::new();
        for schedule in schedules {
            schedule.validate()?;
            let code = schedule.jurisdiction_code.clone();
            if by_code.insert(code.clone(), schedule).is_some() {
                return Err(ValidationError::DuplicateJurisdiction(code.to_string()));
            }
        }

        for range in &ranges {
            range.validate()?;
            if !by_code.contains_key(&range.jurisdiction) {
                return Err(ValidationError::UnknownJurisdiction {
                    jurisdiction: range.jurisdiction.to_string(),
                    low: range.low,
                    high: range.high,
                });
            }
        }

        let ranges = sorted_disjoint(ranges)?;
        Ok(Self {
            schedules: by_code,
            ranges,
        })
    }

    /// The compiled-in Georgia/Texas table, initialised on first use.
    pub fn builtin() -> &'static RateTable {
        BUILTIN.get_or_init(builtin_table)
    }

    /// Parse and validate a table from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let doc: RateTableDocument = serde_yaml::from_str(yaml)
            .map_err(|source| ConfigError::YamlParse { path: None, source })?;
        Self::try_from(doc).map_err(|source| ConfigError::Invalid { path: None, source })
    }

    /// Load and validate a table from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: RateTableDocument =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
                path: Some(path.to_path_buf()),
                source,
            })?;
        let table = Self::try_from(doc).map_err(|source| ConfigError::Invalid {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            jurisdictions = table.schedules.len(),
            ranges = table.ranges.len(),
            "loaded rate table"
        );
        Ok(table)
    }

    /// Schedule for a jurisdiction code, if the table has one.
    pub fn schedule(&self, code: &JurisdictionCode) -> Option<&FeeSchedule> {
        self.schedules.get(code)
    }

    /// All schedules, ordered by jurisdiction code.
    pub fn schedules(&self) -> impl Iterator<Item = &FeeSchedule> {
        self.schedules.values()
    }

    /// All ranges, ordered by lower bound.
    pub fn ranges(&self) -> &[ZipRange] {
        &self.ranges
    }

    /// Ranges that map to the given jurisdiction, ordered by lower bound.
    pub fn ranges_for<'a>(&'a self, code: &'a JurisdictionCode) -> impl Iterator<Item = &'a ZipRange> {
        self.ranges.iter().filter(move |r| &r.jurisdiction == code)
    }

    /// The range containing `zip`, if any.
    pub fn range_containing(&self, zip: ZipCode) -> Option<&ZipRange> {
        let idx = self.ranges.partition_point(|r| r.low <= zip.value());
        let candidate = self.ranges.get(idx.checked_sub(1)?)?;
        candidate.contains(zip).then_some(candidate)
    }

    /// The schedule governing `zip`, if it falls in a supported range.
    pub fn schedule_for_zip(&self, zip: ZipCode) -> Option<&FeeSchedule> {
        let range = self.range_containing(zip)?;
        self.schedules.get(&range.jurisdiction)
    }

    /// Serializable form of the table.
    pub fn to_document(&self) -> RateTableDocument {
        RateTableDocument {
            schedules: self.schedules.values().cloned().collect(),
            ranges: self.ranges.clone(),
        }
    }
}

impl TryFrom<RateTableDocument> for RateTable {
    type Error = ValidationError;

    fn try_from(doc: RateTableDocument) -> Result<Self, Self::Error> {
        Self::new(doc.schedules, doc.ranges)
    }
}

fn sorted_disjoint(mut ranges: Vec<ZipRange>) -> Result<Vec<ZipRange>, ValidationError> {
    ranges.sort_by_key(|r| (r.low, r.high));
    // Sorted by lower bound, any overlap shows up between neighbours.
    for pair in ranges.windows(2) {
        if pair[0].overlaps(&pair[1]) {
            return Err(ValidationError::OverlappingRanges {
                first: pair[0].to_string(),
                second: pair[1].to_string(),
            });
        }
    }
    Ok(ranges)
}

fn builtin_table() -> RateTable {
    let ga = JurisdictionCode::from_static("GA");
    let tx = JurisdictionCode::from_static("TX");

    let schedules = [
        FeeSchedule {
            jurisdiction_code: ga.clone(),
            jurisdiction_name: "Georgia".to_string(),
            tax_label: "TAVT".to_string(),
            tax_description: "TAVT (Title Ad Valorem Tax, Georgia)".to_string(),
            tax_rate: dec!(0.068),
            title_fee: dec!(18),
            registration_fee: dec!(20),
            dealer_fee_estimate: dec!(899),
        },
        FeeSchedule {
            jurisdiction_code: tx.clone(),
            jurisdiction_name: "Texas".to_string(),
            tax_label: "Sales Tax".to_string(),
            tax_description: "Motor vehicle sales tax in Texas".to_string(),
            tax_rate: dec!(0.0625),
            title_fee: dec!(33),
            registration_fee: dec!(90),
            dealer_fee_estimate: dec!(199),
        },
    ];

    let range = |code: &JurisdictionCode, low, high| ZipRange {
        jurisdiction: code.clone(),
        low,
        high,
    };
    // Sorted by lower bound and disjoint; `builtin_table_passes_validation` checks this.
    let ranges = vec![
        range(&ga, 30001, 31999),
        range(&ga, 39801, 39901),
        range(&tx, 73301, 73399),
        range(&tx, 75001, 79999),
        range(&tx, 88501, 88595),
    ];

    RateTable {
        schedules: schedules
            .into_iter()
            .map(|s| (s.jurisdiction_code.clone(), s))
            .collect(),
        ranges,
    }
}
