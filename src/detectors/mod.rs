//! Security scanner
//!
//! Matches source text against a fixed catalog of vulnerability patterns.
//! The catalog maps each [`VulnerabilityType`] to per-language pattern
//! lists plus an optional `generic` list that applies to every language.
//! For a given type both the language list and the generic list are
//! evaluated, so the same snippet can be reported twice.
//!
//! Matching is case-insensitive and runs over the whole text rather than
//! line by line. Every non-overlapping match is a separate finding whose
//! line is the number of newlines before the match start plus one.
//!
//! # Score
//!
//! ```text
//! score = 100 - Σ weight(type) per finding
//! if lines > 1000: score -= lines / 100
//! score = clamp(score, 0, 100)
//! ```
//!
//! Default weights: sql_injection 25, xss 20, hardcoded_secrets 15,
//! insecure_crypto 15, path_traversal 20.

mod insecure_crypto;
mod path_traversal;
mod secrets;
mod sql_injection;
mod xss;

use crate::config::SecurityConfig;
use crate::models::{line_count, SecurityReport, Vulnerability, VulnerabilityType};
use crate::parsers::Language;
use regex::Regex;
use tracing::debug;

/// Catalog entry for one vulnerability type
pub(crate) struct VulnerabilityRule {
    pub vulnerability_type: VulnerabilityType,
    pub python: Vec<Regex>,
    pub javascript: Vec<Regex>,
    /// Applies regardless of the declared language
    pub generic: Vec<Regex>,
}

impl VulnerabilityRule {
    fn language_patterns(&self, language: &Language) -> &[Regex] {
        match language {
            Language::Python => &self.python,
            Language::JavaScript => &self.javascript,
            Language::Java | Language::Other(_) => &[],
        }
    }
}

/// Compile a built-in catalog pattern, case-insensitive
pub(crate) fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|src| Regex::new(&format!("(?i){src}")).expect("built-in pattern must compile"))
        .collect()
}

/// The catalog, in reporting order
fn catalog() -> [&'static VulnerabilityRule; 5] {
    [
        sql_injection::rule(),
        xss::rule(),
        secrets::rule(),
        insecure_crypto::rule(),
        path_traversal::rule(),
    ]
}

/// Scan `text` with the built-in weights
pub fn scan(text: &str, language: &Language) -> SecurityReport {
    scan_with(text, language, &SecurityConfig::default())
}

/// Scan `text` with custom weights
pub fn scan_with(text: &str, language: &Language, config: &SecurityConfig) -> SecurityReport {
    let mut vulnerabilities = Vec::new();

    for rule in catalog() {
        let patterns = rule
            .language_patterns(language)
            .iter()
            .chain(rule.generic.iter());

        for pattern in patterns {
            for m in pattern.find_iter(text) {
                vulnerabilities.push(Vulnerability {
                    vulnerability_type: rule.vulnerability_type,
                    line: line_of_offset(text, m.start()),
                    code: m.as_str().to_string(),
                    recommendation: rule.vulnerability_type.recommendation().to_string(),
                });
            }
        }
    }

    let security_score = security_score(&vulnerabilities, text, config);
    debug!(
        "Security scan ({}): {} findings, score {}",
        language,
        vulnerabilities.len(),
        security_score
    );

    SecurityReport {
        total_issues: vulnerabilities.len(),
        vulnerabilities,
        security_score,
    }
}

/// 1-based line containing byte `offset`
fn line_of_offset(text: &str, offset: usize) -> usize {
    memchr::memchr_iter(b'\n', &text.as_bytes()[..offset]).count() + 1
}

/// Weighted score for a set of findings
pub fn security_score(
    vulnerabilities: &[Vulnerability],
    text: &str,
    config: &SecurityConfig,
) -> u32 {
    let mut score: i64 = 100;
    for vuln in vulnerabilities {
        score -= i64::from(config.weight(vuln.vulnerability_type));
    }

    let lines = line_count(text);
    if lines > config.large_file_lines {
        score -= (lines / 100) as i64;
    }

    score.clamp(0, 100) as u32
}
