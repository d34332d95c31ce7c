//! Path traversal patterns
//!
//! CWE-22: Improper Limitation of a Pathname to a Restricted Directory

use super::{compile, VulnerabilityRule};
use crate::models::VulnerabilityType;
use std::sync::OnceLock;

static RULE: OnceLock<VulnerabilityRule> = OnceLock::new();

pub(super) fn rule() -> &'static VulnerabilityRule {
    RULE.get_or_init(|| VulnerabilityRule {
        vulnerability_type: VulnerabilityType::PathTraversal,
        python: compile(&[
            r"open\s*\(\s*.*\s*\+\s*.*\s*\)",
            r"join\s*\(\s*.*\s*,\s*.*request\.args\.get\s*\(",
        ]),
        javascript: compile(&[
            r"fs\.readFile\s*\(\s*.*\s*\+\s*.*\s*\)",
            r"fs\.writeFile\s*\(\s*.*\s*\+\s*.*\s*\)",
        ]),
        generic: Vec::new(),
    })
}
