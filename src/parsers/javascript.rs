//! JavaScript detection patterns

use super::{compile, LanguagePatterns};
use std::sync::OnceLock;

static PATTERNS: OnceLock<LanguagePatterns> = OnceLock::new();

pub(super) fn patterns() -> &'static LanguagePatterns {
    PATTERNS.get_or_init(|| LanguagePatterns {
        // Order matters: the first match on a line wins
        functions: compile(&[
            r"^\s*function\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*\((?P<params>[^)]*)\)",
            r"^\s*(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*function\s*\((?P<params>[^)]*)\)",
            r"^\s*(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*:\s*function\s*\((?P<params>[^)]*)\)",
            r"^\s*const\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*\((?P<params>[^)]*)\)\s*=>",
            r"^\s*let\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*\((?P<params>[^)]*)\)\s*=>",
            r"^\s*var\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*\((?P<params>[^)]*)\)\s*=>",
        ]),
        function_excludes: &[],
        classes: compile(&[
            r"^\s*class\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*(extends\s+(?P<parent>[a-zA-Z_][a-zA-Z0-9_.]*))?",
        ]),
        imports: compile(&[
            r#"^\s*import\s+(?:.*\s+from\s+)?['"](?P<import>[^'"]+)['"]"#,
            r#"^\s*const\s+.*\s*=\s*require\(['"](?P<import>[^'"]+)['"]\)"#,
        ]),
        comments: compile(&[r"^\s*//(?P<text>.*)", r"/\*(?P<text>.*?)\*/"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_functions_need_parens() {
        let p = patterns();
        assert!(p.functions.iter().any(|re| re.is_match("let f = (a) => a")));
        assert!(!p.functions.iter().any(|re| re.is_match("let f = a => a")));
    }

    #[test]
    fn test_side_effect_import() {
        let caps = patterns().imports[0]
            .captures("import './styles.css';")
            .expect("import should match");
        assert_eq!(&caps["import"], "./styles.css");
    }
}
