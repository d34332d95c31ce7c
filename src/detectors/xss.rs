//! Cross-site scripting patterns
//!
//! CWE-79: Improper Neutralization of Input During Web Page Generation

use super::{compile, VulnerabilityRule};
use crate::models::VulnerabilityType;
use std::sync::OnceLock;

static RULE: OnceLock<VulnerabilityRule> = OnceLock::new();

pub(super) fn rule() -> &'static VulnerabilityRule {
    RULE.get_or_init(|| VulnerabilityRule {
        vulnerability_type: VulnerabilityType::Xss,
        python: compile(&[r"render_template\s*\(.*\{\{.*\}\}.*\)", r"safe\s*="]),
        javascript: compile(&[r"document\.write\s*\(", r"innerHTML\s*=", r"outerHTML\s*="]),
        generic: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_sinks() {
        let rule = rule();
        let src = "document.write(q);\nel.innerHTML = q;\nel.outerHTML= q;\nel.textContent = q;\n";
        let found: usize = rule.javascript.iter().map(|p| p.find_iter(src).count()).sum();
        assert_eq!(found, 3);
    }

    #[test]
    fn test_python_template_sinks() {
        let rule = rule();
        assert!(rule.python[0].is_match("render_template('x.html', body='{{ v }}')"));
        assert!(rule.python[1].is_match("Markup(v, safe=True)"));
        assert!(!rule.python[0].is_match("render_template('x.html', v=v)"));
    }
}
