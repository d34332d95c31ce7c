//! JSON reporter
//!
//! Outputs the report value as pretty-printed JSON, field names as in the
//! data model.

use super::Report;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: Report<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report)?)
}
