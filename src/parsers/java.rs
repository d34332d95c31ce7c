//! Java detection patterns

use super::{compile, LanguagePatterns};
use std::sync::OnceLock;

static PATTERNS: OnceLock<LanguagePatterns> = OnceLock::new();

pub(super) fn patterns() -> &'static LanguagePatterns {
    PATTERNS.get_or_init(|| LanguagePatterns {
        functions: compile(&[
            r"^\s*(public|private|protected)?\s*(static)?\s*\w+\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*\((?P<params>[^)]*)\)\s*\{?",
        ]),
        // `else if (x) {` otherwise reads as a method named `if`
        function_excludes: &["if ", "for ", "while "],
        classes: compile(&[
            r"^\s*(public\s+)?(?P<kind>class|interface)\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)",
        ]),
        imports: compile(&[r"^\s*import\s+(?P<import>[a-zA-Z_][a-zA-Z0-9_.]*);"]),
        comments: compile(&[r"^\s*//(?P<text>.*)", r"/\*(?P<text>.*?)\*/"]),
    })
}
