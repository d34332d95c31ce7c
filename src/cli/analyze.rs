//! Read-only analysis commands: structure, quality, security, recommend

use super::{emit, Source};
use crate::config::ProjectConfig;
use crate::detectors::scan_with;
use crate::fixes::suggest_fixes;
use crate::parsers::analyze;
use crate::reporters::Report;
use crate::scoring::score_with;
use crate::testgen::recommend_tests;
use anyhow::Result;
use tracing::info;

pub fn structure(source: &Source) -> Result<()> {
    info!("Analyzing structure of {} as {}", source.path.display(), source.language);
    let analysis = analyze(&source.text, &source.language);
    emit(Report::Structure(&analysis), source.format)
}

pub fn quality(source: &Source, config: &ProjectConfig) -> Result<()> {
    info!("Scoring quality of {} as {}", source.path.display(), source.language);
    let report = score_with(&source.text, &source.language, &config.quality);
    emit(Report::Quality(&report), source.format)
}

pub fn security(source: &Source, config: &ProjectConfig, with_fixes: bool) -> Result<()> {
    info!("Scanning {} as {}", source.path.display(), source.language);
    let report = scan_with(&source.text, &source.language, &config.security);

    let fixes = with_fixes
        .then(|| suggest_fixes(&source.text, &report.vulnerabilities, &source.language));

    emit(
        Report::Security {
            report: &report,
            fixes: fixes.as_deref(),
        },
        source.format,
    )
}

pub fn recommend(source: &Source) -> Result<()> {
    info!("Recommending tests for {}", source.path.display());
    let analysis = analyze(&source.text, &source.language);
    let recommendations = recommend_tests(&analysis);
    emit(Report::Recommendations(&recommendations), source.format)
}
