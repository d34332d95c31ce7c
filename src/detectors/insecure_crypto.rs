//! Weak hashing and cipher patterns
//!
//! CWE-327: Use of a Broken or Risky Cryptographic Algorithm

use super::{compile, VulnerabilityRule};
use crate::models::VulnerabilityType;
use std::sync::OnceLock;

static RULE: OnceLock<VulnerabilityRule> = OnceLock::new();

pub(super) fn rule() -> &'static VulnerabilityRule {
    RULE.get_or_init(|| VulnerabilityRule {
        vulnerability_type: VulnerabilityType::InsecureCrypto,
        python: compile(&[r"md5\s*\(", r"sha1\s*\(", r"DES\s*\(", r" Blowfish\s*\("]),
        javascript: compile(&[
            r#"crypto\.createHash\(['"]md5['"]\)"#,
            r#"crypto\.createHash\(['"]sha1['"]\)"#,
        ]),
        generic: Vec::new(),
    })
}
