//! Rule-based fix suggestions
//!
//! Maps each security finding to a canned remediation for its type and
//! language. Suggestions are advisory text, usually a `TODO` comment in the
//! target language. The only rewrite is Python SQL concatenation, where `+`
//! is swapped for `,` to hint at a parameterized call.

use crate::models::{Fix, Vulnerability, VulnerabilityType};
use crate::parsers::Language;
use tracing::debug;

/// One [`Fix`] per vulnerability, in input order
pub fn suggest_fixes(text: &str, vulnerabilities: &[Vulnerability], language: &Language) -> Vec<Fix> {
    let lines: Vec<&str> = text.split('\n').collect();

    let fixes: Vec<Fix> = vulnerabilities
        .iter()
        .map(|vuln| generate_fix(vuln, &lines, language))
        .collect();

    debug!("Suggested {} fixes ({})", fixes.len(), language);
    fixes
}

fn generate_fix(vuln: &Vulnerability, lines: &[&str], language: &Language) -> Fix {
    // Out-of-range lines fall back to the matched snippet
    let full_line = match vuln.line {
        0 => vuln.code.as_str(),
        n => lines.get(n - 1).copied().unwrap_or(&vuln.code),
    };

    let suggested_fix = match vuln.vulnerability_type {
        VulnerabilityType::SqlInjection => fix_sql_injection(full_line, language),
        VulnerabilityType::Xss => fix_xss(full_line, language).to_string(),
        VulnerabilityType::HardcodedSecrets => {
            "# TODO: Move secrets to environment variables or secure configuration management"
                .to_string()
        }
        VulnerabilityType::InsecureCrypto => fix_insecure_crypto(full_line, language),
        VulnerabilityType::PathTraversal => {
            "# TODO: Validate and sanitize file paths, use secure file access methods".to_string()
        }
    };

    Fix {
        vulnerability_type: vuln.vulnerability_type,
        line_number: vuln.line,
        problematic_code: full_line.to_string(),
        suggested_fix,
        recommendation: vuln.recommendation.clone(),
    }
}

fn fix_sql_injection(line: &str, language: &Language) -> String {
    match language {
        Language::Python => {
            if line.contains("execute(") && line.contains('+') {
                format!(
                    "{}  # Fixed: Using parameterized query instead of string concatenation",
                    line.replace('+', ",")
                )
            } else {
                "# TODO: Use parameterized queries with proper escaping".to_string()
            }
        }
        Language::JavaScript => {
            if line.contains(".query(") && line.contains('+') {
                "// TODO: Use parameterized queries with placeholders instead of string concatenation"
                    .to_string()
            } else {
                "# TODO: Use parameterized queries with proper escaping".to_string()
            }
        }
        Language::Java | Language::Other(_) => {
            "# TODO: Use parameterized queries instead of string concatenation".to_string()
        }
    }
}

fn fix_xss(line: &str, language: &Language) -> &'static str {
    match language {
        Language::JavaScript if line.contains("document.write") => {
            "// TODO: Use safe DOM manipulation methods or sanitize input before writing"
        }
        Language::JavaScript if line.contains("innerHTML") => {
            "// TODO: Use textContent or properly sanitize HTML content"
        }
        Language::Python if line.contains("safe") => {
            "# TODO: Remove |safe filter and properly escape template variables"
        }
        _ => "# TODO: Sanitize user input and use secure templating",
    }
}

fn fix_insecure_crypto(line: &str, language: &Language) -> String {
    let marker = match language {
        Language::Python => "#",
        Language::JavaScript => "//",
        Language::Java | Language::Other(_) => "",
    };

    if !marker.is_empty() && line.contains("md5") {
        format!("{marker} TODO: Replace MD5 with SHA-256 or bcrypt for secure hashing")
    } else if !marker.is_empty() && line.contains("sha1") {
        format!("{marker} TODO: Replace SHA-1 with SHA-256 for secure hashing")
    } else {
        "# TODO: Use secure cryptographic algorithms".to_string()
    }
}
