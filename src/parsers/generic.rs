//! Fallback patterns for languages without a dedicated table

use super::{compile, LanguagePatterns};
use std::sync::OnceLock;

static PATTERNS: OnceLock<LanguagePatterns> = OnceLock::new();

pub(super) fn patterns() -> &'static LanguagePatterns {
    PATTERNS.get_or_init(|| LanguagePatterns {
        // No parameter capture here
        functions: compile(&[
            r"^\s*(function|def|public|private)\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*\(",
        ]),
        function_excludes: &[],
        classes: compile(&[r"^\s*(?P<kind>class|interface)\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)"]),
        imports: Vec::new(),
        comments: compile(&[r"^\s*[#*/]+(?P<text>.*)"]),
    })
}
