//! Test-case synthesis
//!
//! Turns structural analysis into placeholder Python test skeletons. The
//! record's `analysis_type` tag picks the strategy, not its content:
//!
//! | tag | output |
//! |---|---|
//! | `function_detection`, `basic` | one test per function |
//! | `class_detection` | one test per class |
//! | `quality` | functions, then classes |
//! | `test_recommendations` | one test per recommendation |
//! | anything else | one placeholder for the whole file |
//!
//! Generated tests always end in a placeholder assertion. Nothing here
//! runs them.

mod recommend;
mod templates;

pub use recommend::recommend_tests;

use crate::models::{
    AnalysisResult, ClassInfo, FunctionInfo, GeneratedTestCase, QualityReport, TestCaseStatus,
    TestCaseType, TestKind, TestRecommendation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Tag describing which analysis produced a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnalysisKind {
    FunctionDetection,
    Basic,
    ClassDetection,
    Quality,
    TestRecommendations,
    Other(String),
}

impl AnalysisKind {
    pub fn parse(tag: &str) -> Self {
        match tag.trim() {
            "function_detection" => AnalysisKind::FunctionDetection,
            "basic" => AnalysisKind::Basic,
            "class_detection" => AnalysisKind::ClassDetection,
            "quality" => AnalysisKind::Quality,
            "test_recommendations" => AnalysisKind::TestRecommendations,
            other => AnalysisKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AnalysisKind::FunctionDetection => "function_detection",
            AnalysisKind::Basic => "basic",
            AnalysisKind::ClassDetection => "class_detection",
            AnalysisKind::Quality => "quality",
            AnalysisKind::TestRecommendations => "test_recommendations",
            AnalysisKind::Other(tag) => tag,
        }
    }
}

impl FromStr for AnalysisKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AnalysisKind::parse(s))
    }
}

impl From<String> for AnalysisKind {
    fn from(tag: String) -> Self {
        AnalysisKind::parse(&tag)
    }
}

impl From<AnalysisKind> for String {
    fn from(kind: AnalysisKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result body of a stored analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisPayload {
    Quality(QualityReport),
    TestRecommendations {
        structure_analysis: AnalysisResult,
        recommendations: Vec<TestRecommendation>,
    },
    Structure(AnalysisResult),
}

impl AnalysisPayload {
    /// The structural analysis carried by any payload
    pub fn structure(&self) -> &AnalysisResult {
        match self {
            AnalysisPayload::TestRecommendations {
                structure_analysis, ..
            } => structure_analysis,
            AnalysisPayload::Quality(report) => &report.structure_analysis,
            AnalysisPayload::Structure(result) => result,
        }
    }

    fn recommendations(&self) -> &[TestRecommendation] {
        match self {
            AnalysisPayload::TestRecommendations {
                recommendations, ..
            } => recommendations,
            _ => &[],
        }
    }
}

/// An analysis result as stored for one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAnalysisRecord {
    pub file_path: String,
    pub analysis_type: AnalysisKind,
    pub result: AnalysisPayload,
}

/// Generate placeholder test cases for `record` under `project`
pub fn synthesize(record: &CodeAnalysisRecord, project: &str) -> Vec<GeneratedTestCase> {
    let structure = record.result.structure();

    let cases: Vec<GeneratedTestCase> = match &record.analysis_type {
        AnalysisKind::FunctionDetection | AnalysisKind::Basic => structure
            .functions
            .iter()
            .map(|func| function_case(func, project, None))
            .collect(),
        AnalysisKind::ClassDetection => structure
            .classes
            .iter()
            .map(|cls| class_case(cls, project, None))
            .collect(),
        AnalysisKind::Quality => structure
            .functions
            .iter()
            .map(|func| function_case(func, project, None))
            .chain(structure.classes.iter().map(|cls| class_case(cls, project, None)))
            .collect(),
        AnalysisKind::TestRecommendations => record
            .result
            .recommendations()
            .iter()
            .map(|rec| recommendation_case(rec, structure, project))
            .collect(),
        AnalysisKind::Other(_) => vec![file_case(&record.file_path, project)],
    };

    debug!(
        "Synthesized {} test cases for {} ({})",
        cases.len(),
        record.file_path,
        record.analysis_type
    );
    cases
}

fn recommendation_case(
    rec: &TestRecommendation,
    structure: &AnalysisResult,
    project: &str,
) -> GeneratedTestCase {
    let description = Some(rec.description.as_str());

    match rec.kind {
        TestKind::UnitTest | TestKind::ApiTest => {
            let name = rec.target.strip_prefix("function ").unwrap_or(&rec.target);
            // Recover the signature when the function is still in the analysis
            let func = structure
                .functions
                .iter()
                .find(|f| f.name == name)
                .cloned()
                .unwrap_or_else(|| FunctionInfo {
                    name: name.to_string(),
                    parameters: Vec::new(),
                    line_number: 1,
                });
            function_case(&func, project, description)
        }
        TestKind::IntegrationTest => {
            let name = rec.target.strip_prefix("class ").unwrap_or(&rec.target);
            let cls = ClassInfo {
                name: name.to_string(),
                parent_class: None,
                kind: None,
                line_number: 1,
            };
            class_case(&cls, project, description)
        }
    }
}

fn function_case(func: &FunctionInfo, project: &str, description: Option<&str>) -> GeneratedTestCase {
    new_case(
        format!("Test for function {}", func.name),
        description.map(str::to_string).unwrap_or_else(|| {
            format!(
                "Automated test case for function '{}' detected at line {}",
                func.name, func.line_number
            )
        }),
        project,
        templates::function_test(&func.name, &func.parameters),
    )
}

fn class_case(cls: &ClassInfo, project: &str, description: Option<&str>) -> GeneratedTestCase {
    new_case(
        format!("Test for class {}", cls.name),
        description.map(str::to_string).unwrap_or_else(|| {
            format!(
                "Automated test case for class '{}' detected at line {}",
                cls.name, cls.line_number
            )
        }),
        project,
        templates::class_test(&cls.name),
    )
}

fn file_case(file_path: &str, project: &str) -> GeneratedTestCase {
    new_case(
        format!("Test for {file_path}"),
        format!("Automated test case for file '{file_path}' based on code analysis"),
        project,
        templates::file_test(file_path),
    )
}

fn new_case(title: String, description: String, project: &str, test_code: String) -> GeneratedTestCase {
    GeneratedTestCase {
        title,
        description,
        test_type: TestCaseType::Unit,
        status: TestCaseStatus::Draft,
        ai_generated: true,
        project: project.to_string(),
        test_code,
        created_by: None,
    }
}
