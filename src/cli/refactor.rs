//! Refactor command - apply fixes and improvements to a file

use super::{emit, Source};
use crate::config::ProjectConfig;
use crate::detectors::scan_with;
use crate::fixes::suggest_fixes;
use crate::models::PriorAnalysis;
use crate::refactor::generate_refactored_code;
use crate::reporters::Report;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tracing::info;

/// Run the refactor command
pub fn run(
    source: &Source,
    config: &ProjectConfig,
    with_security: bool,
    output: Option<&Path>,
) -> Result<()> {
    let prior = if with_security {
        let report = scan_with(&source.text, &source.language, &config.security);
        let fixes = suggest_fixes(&source.text, &report.vulnerabilities, &source.language);
        info!("Feeding {} security fixes into refactor", fixes.len());
        PriorAnalysis::with_security(&report, fixes)
    } else {
        PriorAnalysis::default()
    };

    let result = generate_refactored_code(&source.text, &source.language, &prior);

    if let Some(out_path) = output {
        std::fs::write(out_path, &result.refactored_code)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        eprintln!(
            "{} Wrote {} ({} fixes applied)",
            style("✓").green(),
            style(out_path.display()).cyan(),
            result.improvement_stats.fixes_applied
        );
    }

    emit(Report::Refactor(&result), source.format)
}
