//! Python detection patterns

use super::{compile, LanguagePatterns};
use std::sync::OnceLock;

static PATTERNS: OnceLock<LanguagePatterns> = OnceLock::new();

pub(super) fn patterns() -> &'static LanguagePatterns {
    PATTERNS.get_or_init(|| LanguagePatterns {
        functions: compile(&[
            r"^\s*def\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*\((?P<params>[^)]*)\):",
        ]),
        function_excludes: &[],
        classes: compile(&[
            r"^\s*class\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*(\((?P<parent>[^)]*)\))?:",
        ]),
        imports: compile(&[
            r"^\s*(?P<import>import\s+[a-zA-Z_][a-zA-Z0-9_.]*|from\s+[a-zA-Z_][a-zA-Z0-9_.]*\s+import\s+.*)",
        ]),
        comments: compile(&[r"^\s*#(?P<text>.*)"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_requires_colon() {
        let p = patterns();
        assert!(p.functions[0].is_match("def foo(a):"));
        assert!(!p.functions[0].is_match("def foo(a) -> int:"));
    }

    #[test]
    fn test_empty_parent_parens() {
        let caps = patterns().classes[0]
            .captures("class A():")
            .expect("class should match");
        assert_eq!(caps.name("parent").map(|m| m.as_str()), Some(""));
    }
}
