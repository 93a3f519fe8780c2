//! JSON reporter
//!
//! Outputs file reports as pretty-printed JSON for piping to jq or other
//! tooling.

use crate::models::FileReport;
use anyhow::Result;

/// Render all reports as a JSON array
pub fn render(reports: &[FileReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Render a single report as a JSON object
pub fn render_one(report: &FileReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
