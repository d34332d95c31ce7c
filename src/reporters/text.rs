//! Text (terminal) reporter with colors and formatting

use super::Report;
use crate::models::{
    grade_from_score, AnalysisResult, Fix, GeneratedTestCase, Priority, QualityReport,
    RefactorResult, SecurityReport, TestRecommendation,
};
use anyhow::Result;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "\x1b[32m", // Green
        "B" => "\x1b[92m", // Light green
        "C" => "\x1b[33m", // Yellow
        "D" => "\x1b[91m", // Light red
        "F" => "\x1b[31m", // Red
        _ => "\x1b[0m",
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

const RULE: &str = "──────────────────────────────────────";

/// Render report as formatted terminal output
pub fn render(report: Report<'_>) -> Result<String> {
    let mut out = String::new();
    match report {
        Report::Structure(analysis) => render_structure(&mut out, analysis),
        Report::Quality(quality) => render_quality(&mut out, quality),
        Report::Security { report, fixes } => render_security(&mut out, report, fixes),
        Report::Refactor(result) => render_refactor(&mut out, result),
        Report::Recommendations(recs) => render_recommendations(&mut out, recs),
        Report::TestCases(cases) => render_test_cases(&mut out, cases),
    }
    Ok(out)
}

fn header(out: &mut String, title: &str) {
    out.push_str(&format!("\n{BOLD}{title}{RESET}\n"));
    out.push_str(&format!("{DIM}{RULE}{RESET}\n"));
}

fn score_line(out: &mut String, label: &str, score: u32) {
    let grade = grade_from_score(score);
    let grade_c = grade_color(grade);
    out.push_str(&format!(
        "{label}: {BOLD}{score}/100{RESET}  Grade: {grade_c}{BOLD}{grade}{RESET}\n\n"
    ));
}

fn render_structure(out: &mut String, analysis: &AnalysisResult) {
    header(out, "Structure");
    out.push_str(&format!(
        "Functions: {}  Classes: {}  Imports: {}  Comments: {}  Complexity: {}  LOC: {}\n\n",
        analysis.functions.len(),
        analysis.classes.len(),
        analysis.imports.len(),
        analysis.comments.len(),
        analysis.complexity,
        analysis.lines_of_code
    ));

    if !analysis.functions.is_empty() {
        out.push_str(&format!("{BOLD}FUNCTIONS{RESET}\n"));
        for func in &analysis.functions {
            let params: Vec<&str> = func.parameters.iter().map(|p| p.trim()).collect();
            out.push_str(&format!(
                "  {DIM}{:>4}{RESET}  {}({})\n",
                func.line_number,
                func.name,
                params.join(", ")
            ));
        }
        out.push('\n');
    }

    if !analysis.classes.is_empty() {
        out.push_str(&format!("{BOLD}CLASSES{RESET}\n"));
        for cls in &analysis.classes {
            let parent = match cls.parent_class.as_deref() {
                Some(p) if !p.is_empty() => format!(" {DIM}extends {p}{RESET}"),
                _ => String::new(),
            };
            out.push_str(&format!(
                "  {DIM}{:>4}{RESET}  {}{}\n",
                cls.line_number, cls.name, parent
            ));
        }
        out.push('\n');
    }

    if !analysis.imports.is_empty() {
        out.push_str(&format!("{BOLD}IMPORTS{RESET}\n"));
        for import in &analysis.imports {
            out.push_str(&format!("  {import}\n"));
        }
        out.push('\n');
    }
}

fn render_quality(out: &mut String, report: &QualityReport) {
    header(out, "Quality");
    score_line(out, "Score", report.quality_score);

    if report.issues.is_empty() {
        out.push_str(&format!("{DIM}No issues found.{RESET}\n"));
        return;
    }

    out.push_str(&format!("{BOLD}ISSUES{RESET} ({} total)\n", report.issues.len()));
    for issue in &report.issues {
        out.push_str(&format!(
            "  {YELLOW}[{}]{RESET} {}\n",
            issue.severity, issue.message
        ));
    }
    out.push('\n');

    out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET}\n"));
    for rec in &report.recommendations {
        out.push_str(&format!("  - {}\n", rec.message));
    }
}

fn render_security(out: &mut String, report: &SecurityReport, fixes: Option<&[Fix]>) {
    header(out, "Security");
    score_line(out, "Security score", report.security_score);

    if report.vulnerabilities.is_empty() {
        out.push_str(&format!("{GREEN}No vulnerabilities found.{RESET}\n"));
        return;
    }

    out.push_str(&format!(
        "{BOLD}VULNERABILITIES{RESET} ({} total)\n",
        report.total_issues
    ));
    out.push_str(&format!(
        "{DIM}  LINE  TYPE                MATCH{RESET}\n"
    ));
    for vuln in &report.vulnerabilities {
        out.push_str(&format!(
            "  {DIM}{:>4}{RESET}  {RED}{:<18}{RESET}  {}\n",
            vuln.line,
            vuln.vulnerability_type.as_str(),
            truncate(&vuln.code, 50)
        ));
    }
    out.push('\n');

    if let Some(fixes) = fixes.filter(|f| !f.is_empty()) {
        out.push_str(&format!("{BOLD}SUGGESTED FIXES{RESET}\n"));
        for fix in fixes {
            out.push_str(&format!(
                "  {DIM}line {}{RESET} {}\n",
                fix.line_number, fix.vulnerability_type
            ));
            out.push_str(&format!("    {RED}- {}{RESET}\n", fix.problematic_code.trim()));
            out.push_str(&format!("    {GREEN}+ {}{RESET}\n", fix.suggested_fix.trim()));
            out.push_str(&format!("    {DIM}{}{RESET}\n", fix.recommendation));
        }
    }
}

fn render_refactor(out: &mut String, result: &RefactorResult) {
    let stats = &result.improvement_stats;
    header(out, "Refactor");
    out.push_str(&format!(
        "Fixes applied: {BOLD}{}{RESET}  Improvement: {BOLD}{}%{RESET}  Lines: {} -> {}\n\n",
        stats.fixes_applied, stats.improvement_percentage, stats.lines_original, stats.lines_refactored
    ));

    if !result.applied_fixes.is_empty() {
        out.push_str(&format!("{BOLD}APPLIED{RESET}\n"));
        for record in &result.applied_fixes {
            let location = match record.line {
                Some(line) => format!(" {DIM}(line {line}){RESET}"),
                None => String::new(),
            };
            out.push_str(&format!(
                "  {YELLOW}{:<15}{RESET} {}{}\n",
                record.category.as_str(),
                record.description,
                location
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("{BOLD}REFACTORED CODE{RESET}\n"));
    out.push_str(&result.refactored_code);
    if !result.refactored_code.ends_with('\n') {
        out.push('\n');
    }
}

fn render_recommendations(out: &mut String, recs: &[TestRecommendation]) {
    header(out, "Test recommendations");
    if recs.is_empty() {
        out.push_str(&format!("{DIM}Nothing to test.{RESET}\n"));
        return;
    }
    for rec in recs {
        let priority = match rec.priority {
            Priority::High => format!("{RED}high{RESET}  "),
            Priority::Medium => format!("{YELLOW}medium{RESET}"),
        };
        out.push_str(&format!("  {priority}  {}\n", rec.description));
    }
}

fn render_test_cases(out: &mut String, cases: &[GeneratedTestCase]) {
    header(out, "Generated tests");
    out.push_str(&format!("{} test case(s)\n", cases.len()));
    for case in cases {
        out.push_str(&format!("\n{BOLD}{}{RESET}\n", case.title));
        out.push_str(&format!("{DIM}{}{RESET}\n", case.description));
        out.push_str(&case.test_code);
    }
}

/// Truncate on char boundaries
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}
