//! # Jurisdiction Resolver
//!
//! Maps raw ZIP code text to the [`FeeSchedule`] of the jurisdiction that
//! governs it.
//!
//! Input is normalized first: every non-digit character is stripped and the
//! first five remaining digits are kept. Fewer than five digits, or five
//! digits outside every supported range, both resolve to `None`. Neither is
//! an error; an incomplete ZIP is the normal state of a form being typed.
//!
//! Membership is tested against the numeric ranges of the injected
//! [`RateTable`]. There is no two-digit prefix fallback.

use serde::Serialize;

use crate::input::normalize_zip;
use crate::jurisdiction::FeeSchedule;
use crate::table::RateTable;
use crate::zip::ZipCode;

/// Outcome of a ZIP lookup, keeping the reason a lookup did not resolve.
///
/// [`JurisdictionResolver::resolve`] collapses both unresolved variants
/// into `None`; this type exists for callers that want to tell the user
/// which one happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ZipLookup<'t> {
    /// Fewer than five digits after normalization.
    Incomplete {
        /// Number of digits found.
        digits: usize,
    },
    /// Five digits, but no supported range contains them.
    Unsupported {
        /// The complete ZIP code.
        zip: ZipCode,
    },
    /// The ZIP code falls in a supported jurisdiction.
    Resolved {
        /// The complete ZIP code.
        zip: ZipCode,
        /// Schedule of the governing jurisdiction.
        schedule: &'t FeeSchedule,
    },
}

impl<'t> ZipLookup<'t> {
    /// The resolved schedule, or `None` for either unresolved outcome.
    pub fn schedule(&self) -> Option<&'t FeeSchedule> {
        match self {
            Self::Resolved { schedule, .. } => Some(*schedule),
            Self::Incomplete { .. } | Self::Unsupported { .. } => None,
        }
    }

    /// The complete ZIP code, if five digits were present.
    pub fn zip(&self) -> Option<ZipCode> {
        match self {
            Self::Unsupported { zip } | Self::Resolved { zip, .. } => Some(*zip),
            Self::Incomplete { .. } => None,
        }
    }
}

/// Resolves ZIP codes against a borrowed [`RateTable`].
///
/// Stateless apart from the table reference; copy it freely and share it
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct JurisdictionResolver<'t> {
    table: &'t RateTable,
}

impl<'t> JurisdictionResolver<'t> {
    /// A resolver over the given table.
    pub fn new(table: &'t RateTable) -> Self {
        Self { table }
    }

    /// The table this resolver consults.
    pub fn table(&self) -> &'t RateTable {
        self.table
    }

    /// Resolve raw ZIP text to a fee schedule.
    ///
    /// Returns `None` (unresolved) for malformed, incomplete, or
    /// out-of-coverage input.
    pub fn resolve(&self, raw_zip: &str) -> Option<&'t FeeSchedule> {
        self.lookup(raw_zip).schedule()
    }

    /// Resolve raw ZIP text, reporting which outcome occurred.
    pub fn lookup(&self, raw_zip: &str) -> ZipLookup<'t> {
        let Some(zip) = ZipCode::from_raw(raw_zip) else {
            let digits = normalize_zip(raw_zip).len();
            tracing::trace!(digits, "ZIP incomplete");
            return ZipLookup::Incomplete { digits };
        };

        match self.table.schedule_for_zip(zip) {
            Some(schedule) => {
                tracing::debug!(%zip, jurisdiction = %schedule.jurisdiction_code, "ZIP resolved");
                ZipLookup::Resolved { zip, schedule }
            }
            None => {
                tracing::debug!(%zip, "ZIP outside supported ranges");
                ZipLookup::Unsupported { zip }
            }
        }
    }
}

impl JurisdictionResolver<'static> {
    /// A resolver over [`RateTable::builtin`].
    pub fn builtin() -> Self {
        Self::new(RateTable::builtin())
    }
}

impl Default for JurisdictionResolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve raw ZIP text against the built-in table.
pub fn resolve(raw_zip: &str) -> Option<&'static FeeSchedule> {
    JurisdictionResolver::builtin().resolve(raw_zip)
}
