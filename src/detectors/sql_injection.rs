//! SQL injection patterns
//!
//! Flags query calls whose argument is built by string concatenation.
//! CWE-89: Improper Neutralization of Special Elements used in an SQL Command

use super::{compile, VulnerabilityRule};
use crate::models::VulnerabilityType;
use std::sync::OnceLock;

static RULE: OnceLock<VulnerabilityRule> = OnceLock::new();

pub(super) fn rule() -> &'static VulnerabilityRule {
    RULE.get_or_init(|| VulnerabilityRule {
        vulnerability_type: VulnerabilityType::SqlInjection,
        python: compile(&[
            r"execute\s*\(\s*.*\s*\+\s*.*\s*\)",
            r"executemany\s*\(\s*.*\s*\+\s*.*\s*\)",
            r"cursor\.execute\s*\(\s*.*[%s]s.*[%s]s.*\s*\+\s*.*\s*\)",
        ]),
        javascript: compile(&[
            r"\.query\s*\(\s*.*\s*\+\s*.*\s*\)",
            r"mysql\.query\s*\(\s*.*\s*\+\s*.*\s*\)",
        ]),
        generic: Vec::new(),
    })
}
