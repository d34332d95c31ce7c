//! Output reporters for codescope results
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::{
    AnalysisResult, Fix, GeneratedTestCase, QualityReport, RefactorResult, SecurityReport,
    TestRecommendation,
};
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Anything a subcommand can print
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Report<'a> {
    Structure(&'a AnalysisResult),
    Quality(&'a QualityReport),
    Security {
        #[serde(flatten)]
        report: &'a SecurityReport,
        #[serde(skip_serializing_if = "Option::is_none")]
        fixes: Option<&'a [Fix]>,
    },
    Refactor(&'a RefactorResult),
    Recommendations(&'a [TestRecommendation]),
    TestCases(&'a [GeneratedTestCase]),
}

/// Render a report in the named format
pub fn report(report: Report<'_>, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt)
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(report: Report<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
    }
}
