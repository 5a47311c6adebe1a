//! # Schedules Subcommand
//!
//! `otd schedules` lists every jurisdiction in the active rate table with
//! its fees and ZIP ranges.

use anyhow::Result;
use clap::Args;

use otd_core::RateTable;

use crate::lookup::describe_schedule;
use crate::OutputFormat;

/// Arguments for the `otd schedules` subcommand.
#[derive(Args, Debug)]
pub struct SchedulesArgs {
    /// Output format. `json` emits the table in rate-file shape.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the schedules subcommand.
pub fn run_schedules(args: &SchedulesArgs, table: &RateTable) -> Result<u8> {
    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table.to_document())?)
        }
        OutputFormat::Text => print!("{}", render_schedules(table)),
    }
    Ok(0)
}

/// Plain-text listing of all schedules.
pub fn render_schedules(table: &RateTable) -> String {
    let mut out = String::new();
    for schedule in table.schedules() {
        out.push_str(&format!(
            "{} ({})\n",
            schedule.jurisdiction_name, schedule.jurisdiction_code
        ));
        out.push_str(&describe_schedule(schedule));
        let ranges: Vec<String> = table
            .ranges_for(&schedule.jurisdiction_code)
            .map(|r| format!("{:05}-{:05}", r.low, r.high))
            .collect();
        out.push_str(&format!("  {:<22}{}\n\n", "ZIP Ranges", ranges.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_builtin_schedules_with_ranges() {
        let text = render_schedules(RateTable::builtin());
        assert!(text.contains("Georgia (GA)"));
        assert!(text.contains("Texas (TX)"));
        assert!(text.contains("30001-31999, 39801-39901"));
        assert!(text.contains("73301-73399, 75001-79999, 88501-88595"));
    }
}
