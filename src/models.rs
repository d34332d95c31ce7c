//! Core data models for codescope
//!
//! Every value here is built in one pass by an analysis component and
//! returned to the caller; nothing is mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A function or method declaration found by the structural analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    /// Raw comma-split parameter text, whitespace preserved
    #[serde(default)]
    pub parameters: Vec<String>,
    /// 1-based line of the declaration
    pub line_number: usize,
}

/// Declaration keyword for Java and generic class detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
}

impl ClassKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(ClassKind::Class),
            "interface" => Some(ClassKind::Interface),
            _ => None,
        }
    }
}

/// A class or interface declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub parent_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ClassKind>,
    pub line_number: usize,
}

/// A line comment (or inline block comment) with its text trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInfo {
    pub text: String,
    pub line_number: usize,
}

/// Output of the structural analyzer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub functions: Vec<FunctionInfo>,
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub comments: Vec<CommentInfo>,
    /// functions + classes
    #[serde(default)]
    pub complexity: usize,
    /// Number of `\n`-separated segments, trailing empty segment included
    #[serde(default)]
    pub lines_of_code: usize,
}

/// Count lines the way every component does: segments between `\n`.
///
/// `"a\n"` has two lines, `""` has one.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Kind of quality issue raised by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Complexity,
    Documentation,
    FunctionParameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    #[default]
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub message: String,
    #[serde(default)]
    pub severity: IssueSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Refactor,
    Documentation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub message: String,
}

/// Output of the quality scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub structure_analysis: AnalysisResult,
    /// 0..=100
    pub quality_score: u32,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// Vulnerability categories known to the security catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VulnerabilityType {
    SqlInjection,
    Xss,
    HardcodedSecrets,
    InsecureCrypto,
    PathTraversal,
}

impl VulnerabilityType {
    /// Catalog order; findings are emitted type by type in this order
    pub const ALL: [VulnerabilityType; 5] = [
        VulnerabilityType::SqlInjection,
        VulnerabilityType::Xss,
        VulnerabilityType::HardcodedSecrets,
        VulnerabilityType::InsecureCrypto,
        VulnerabilityType::PathTraversal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VulnerabilityType::SqlInjection => "sql_injection",
            VulnerabilityType::Xss => "xss",
            VulnerabilityType::HardcodedSecrets => "hardcoded_secrets",
            VulnerabilityType::InsecureCrypto => "insecure_crypto",
            VulnerabilityType::PathTraversal => "path_traversal",
        }
    }

    /// Score deduction per occurrence
    pub fn default_weight(&self) -> u32 {
        match self {
            VulnerabilityType::SqlInjection => 25,
            VulnerabilityType::Xss => 20,
            VulnerabilityType::HardcodedSecrets => 15,
            VulnerabilityType::InsecureCrypto => 15,
            VulnerabilityType::PathTraversal => 20,
        }
    }

    /// Generic remediation advice attached to every finding of this type
    pub fn recommendation(&self) -> &'static str {
        match self {
            VulnerabilityType::SqlInjection => {
                "Use parameterized queries or ORM methods instead of string concatenation"
            }
            VulnerabilityType::Xss => "Sanitize user input and use secure templating engines",
            VulnerabilityType::HardcodedSecrets => {
                "Use environment variables or secure configuration management"
            }
            VulnerabilityType::InsecureCrypto => {
                "Use secure hashing algorithms like SHA-256 or bcrypt"
            }
            VulnerabilityType::PathTraversal => {
                "Validate and sanitize file paths, use secure file access methods"
            }
        }
    }
}

impl fmt::Display for VulnerabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single regex hit from the security scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(rename = "type")]
    pub vulnerability_type: VulnerabilityType,
    /// 1-based line of the match start
    pub line: usize,
    /// Matched snippet
    pub code: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityReport {
    pub vulnerabilities: Vec<Vulnerability>,
    /// 0..=100
    pub security_score: u32,
    pub total_issues: usize,
}

/// Advisory remediation for one vulnerability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub vulnerability_type: VulnerabilityType,
    pub line_number: usize,
    /// Full source line (or the matched snippet when the line is out of range)
    pub problematic_code: String,
    pub suggested_fix: String,
    pub recommendation: String,
}

/// Security findings plus their suggested fixes, as handed to the code fixer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAnalysis {
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(default)]
    pub security_score: Option<u32>,
    #[serde(default)]
    pub fixes: Vec<Fix>,
}

/// Earlier analysis output the code fixer may consume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorAnalysis {
    #[serde(default)]
    pub security_analysis: Option<SecurityAnalysis>,
}

impl PriorAnalysis {
    pub fn with_security(report: &SecurityReport, fixes: Vec<Fix>) -> Self {
        Self {
            security_analysis: Some(SecurityAnalysis {
                vulnerabilities: report.vulnerabilities.clone(),
                security_score: Some(report.security_score),
                fixes,
            }),
        }
    }
}

/// Category of an applied rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixCategory {
    SecurityFix,
    CodeStyle,
    Performance,
    BestPractices,
}

impl FixCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixCategory::SecurityFix => "security_fix",
            FixCategory::CodeStyle => "code_style",
            FixCategory::Performance => "performance",
            FixCategory::BestPractices => "best_practices",
        }
    }
}

impl fmt::Display for FixCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the code fixer's log of applied rewrites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixRecord {
    #[serde(rename = "type")]
    pub category: FixCategory,
    pub description: String,
    /// Set for security fixes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Set for pattern-table improvements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementStats {
    pub lines_original: usize,
    pub lines_refactored: usize,
    pub fixes_applied: usize,
    /// min(100, fixes_applied * 10)
    pub improvement_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefactorResult {
    pub refactored_code: String,
    pub applied_fixes: Vec<FixRecord>,
    pub improvement_stats: ImprovementStats,
}

/// Kind of test a recommendation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    UnitTest,
    IntegrationTest,
    ApiTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// A suggested test derived from structural analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecommendation {
    #[serde(rename = "type")]
    pub kind: TestKind,
    /// `"function <name>"` or `"class <name>"`
    pub target: String,
    pub priority: Priority,
    pub description: String,
}

/// Test type stamped on generated test cases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCaseType {
    #[default]
    Unit,
}

/// Lifecycle status of a generated test case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCaseStatus {
    #[default]
    Draft,
}

/// A placeholder test produced by the synthesizer.
///
/// The content fields are filled here; `created_by` is left for the caller
/// to stamp before persisting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTestCase {
    pub title: String,
    pub description: String,
    pub test_type: TestCaseType,
    pub status: TestCaseStatus,
    pub ai_generated: bool,
    pub project: String,
    pub test_code: String,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Letter grade for a 0-100 score
pub fn grade_from_score(score: u32) -> &'static str {
    match score {
        s if s >= 90 => "A",
        s if s >= 80 => "B",
        s if s >= 70 => "C",
        s if s >= 60 => "D",
        _ => "F",
    }
}
