//! Tests command - generate placeholder test cases for a file

use super::{emit, Source};
use crate::parsers::analyze;
use crate::reporters::Report;
use crate::scoring::score;
use crate::testgen::{recommend_tests, synthesize, AnalysisKind, AnalysisPayload, CodeAnalysisRecord};
use anyhow::Result;
use tracing::info;

/// Run the tests command
pub fn run(source: &Source, kind: &str, project: &str) -> Result<()> {
    let analysis_type = AnalysisKind::parse(kind);
    let record = CodeAnalysisRecord {
        file_path: source.display_path(),
        result: payload_for(&analysis_type, source),
        analysis_type,
    };

    let cases = synthesize(&record, project);
    info!(
        "Generated {} test cases for {} ({})",
        cases.len(),
        record.file_path,
        record.analysis_type
    );
    emit(Report::TestCases(&cases), source.format)
}

/// Build the payload the chosen analysis would have stored
fn payload_for(kind: &AnalysisKind, source: &Source) -> AnalysisPayload {
    match kind {
        AnalysisKind::Quality => AnalysisPayload::Quality(score(&source.text, &source.language)),
        AnalysisKind::TestRecommendations => {
            let structure_analysis = analyze(&source.text, &source.language);
            let recommendations = recommend_tests(&structure_analysis);
            AnalysisPayload::TestRecommendations {
                structure_analysis,
                recommendations,
            }
        }
        _ => AnalysisPayload::Structure(analyze(&source.text, &source.language)),
    }
}
