//! Code fixer
//!
//! Rewrites a whole file in two phases:
//!
//! 1. Security fixes from a prior scan replace their recorded line with the
//!    suggested text, in the order given. A fix whose line is past the end
//!    of the current text is skipped.
//! 2. The improvement table (code style, performance, best practices) runs
//!    over the patched text.
//!
//! An improvement is reported whenever its pattern matches the *original*
//! input, whether or not the rewrite changed anything. Callers should treat
//! the record list as "rules that applied" rather than "lines that changed".

mod rules;

use crate::models::{
    line_count, Fix, FixCategory, FixRecord, ImprovementStats, PriorAnalysis, RefactorResult,
};
use crate::parsers::Language;
use tracing::debug;

use rules::improvement_table;

/// Apply security fixes and improvements, returning the new text and a log
pub fn apply_fixes(
    text: &str,
    language: &Language,
    prior: &PriorAnalysis,
) -> (String, Vec<FixRecord>) {
    let mut fixed = text.to_string();
    let mut applied = Vec::new();

    if let Some(security) = &prior.security_analysis {
        for fix in &security.fixes {
            if let Some(patched) = apply_security_fix(&fixed, fix) {
                fixed = patched;
                applied.push(FixRecord {
                    category: FixCategory::SecurityFix,
                    description: fix.recommendation.clone(),
                    line: Some(fix.line_number),
                    pattern: None,
                });
            } else {
                debug!(
                    "Skipping {} fix at line {}: out of range",
                    fix.vulnerability_type, fix.line_number
                );
            }
        }
    }

    for table in improvement_table() {
        for rule in table.for_language(language) {
            fixed = rule.apply(&fixed);

            if rule.pattern().is_match(text) {
                applied.push(FixRecord {
                    category: table.category,
                    description: format!("Applied {} improvement", table.category),
                    line: None,
                    pattern: Some(rule.pattern().as_str().to_string()),
                });
            }
        }
    }

    debug!("Applied {} fixes ({})", applied.len(), language);
    (fixed, applied)
}

/// Replace line `fix.line_number` (1-based) with the suggested fix
fn apply_security_fix(text: &str, fix: &Fix) -> Option<String> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if fix.line_number == 0 || fix.line_number > lines.len() {
        return None;
    }
    lines[fix.line_number - 1] = &fix.suggested_fix;
    Some(lines.join("\n"))
}

/// [`apply_fixes`] plus before/after statistics
pub fn generate_refactored_code(
    text: &str,
    language: &Language,
    prior: &PriorAnalysis,
) -> RefactorResult {
    let (refactored_code, applied_fixes) = apply_fixes(text, language, prior);

    let improvement_stats = ImprovementStats {
        lines_original: line_count(text),
        lines_refactored: line_count(&refactored_code),
        fixes_applied: applied_fixes.len(),
        improvement_percentage: improvement_percentage(applied_fixes.len()),
    };

    RefactorResult {
        refactored_code,
        applied_fixes,
        improvement_stats,
    }
}

fn improvement_percentage(fixes_applied: usize) -> u32 {
    fixes_applied.saturating_mul(10).min(100) as u32
}
