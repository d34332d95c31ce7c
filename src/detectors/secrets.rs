//! Hardcoded secret patterns
//!
//! Language-independent: quoted literals of three or more characters
//! assigned to password, secret, key or token names.
//! CWE-798: Use of Hard-coded Credentials

use super::{compile, VulnerabilityRule};
use crate::models::VulnerabilityType;
use std::sync::OnceLock;

static RULE: OnceLock<VulnerabilityRule> = OnceLock::new();

pub(super) fn rule() -> &'static VulnerabilityRule {
    RULE.get_or_init(|| VulnerabilityRule {
        vulnerability_type: VulnerabilityType::HardcodedSecrets,
        python: Vec::new(),
        javascript: Vec::new(),
        generic: compile(&[
            r#"password\s*=\s*['"][^'"]{3,}['"]"#,
            r#"secret\s*=\s*['"][^'"]{3,}['"]"#,
            r#"key\s*=\s*['"][^'"]{3,}['"]"#,
            r#"token\s*=\s*['"][^'"]{3,}['"]"#,
        ]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(src: &str) -> bool {
        rule().generic.iter().any(|p| p.is_match(src))
    }

    #[test]
    fn test_quoted_assignments() {
        assert!(matches(r#"API_KEY = "sk-123456""#));
        assert!(matches("DB_PASSWORD='abc'"));
        assert!(matches(r#"const authToken = "xyz123";"#));
    }

    #[test]
    fn test_short_or_unquoted_values_ignored() {
        assert!(!matches(r#"password = "ab""#));
        assert!(!matches("password = os.environ['PW']"));
        assert!(!matches("key = load_key()"));
    }
}
