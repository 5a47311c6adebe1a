//! Rate table selection.
//!
//! The built-in Georgia/Texas table is used unless a YAML rate file is
//! given with `--rates` or the `OTD_RATES_FILE` environment variable.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use otd_core::RateTable;

/// Environment variable naming an alternative rate table file.
pub const RATES_FILE_ENV: &str = "OTD_RATES_FILE";

/// Load the rate table from `path`, or fall back to the built-in table.
pub fn load_rate_table(path: Option<&Path>) -> Result<Cow<'static, RateTable>> {
    match path {
        Some(path) => {
            let table = RateTable::from_path(path)
                .with_context(|| format!("failed to load rate table from {}", path.display()))?;
            Ok(Cow::Owned(table))
        }
        None => {
            tracing::debug!("using built-in rate table");
            Ok(Cow::Borrowed(RateTable::builtin()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_uses_builtin() {
        let table = load_rate_table(None).unwrap();
        assert!(matches!(table, Cow::Borrowed(_)));
        assert_eq!(table.ranges().len(), 5);
    }

    #[test]
    fn missing_file_is_an_error_with_context() {
        let err = load_rate_table(Some(Path::new("/nonexistent/otd.yaml"))).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to load rate table"));
        assert!(msg.contains("rate table not found"));
    }

    #[test]
    fn yaml_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.yaml");
        std::fs::write(
            &path,
            r#"
schedules:
  - jurisdiction_code: OK
    jurisdiction_name: Oklahoma
    tax_label: Excise Tax
    tax_rate: "0.0325"
    title_fee: "11"
    registration_fee: "96"
    dealer_fee_estimate: "399"
ranges:
  - jurisdiction: OK
    low: 73001
    high: 73199
"#,
        )
        .unwrap();

        let table = load_rate_table(Some(&path)).unwrap();
        assert!(matches!(table, Cow::Owned(_)));
        assert_eq!(table.schedules().count(), 1);
    }
}
