//! Improvement rule tables
//!
//! Each category holds per-language rules. A rule either substitutes every
//! match of its pattern, or hands the whole text to a transform function.
//! In both cases the pattern also decides whether the rule is reported.

use crate::models::FixCategory;
use crate::parsers::Language;
use regex::Regex;
use std::sync::OnceLock;

/// A rewrite applied to the whole text
pub(crate) enum FixRule {
    /// Replace every match with `replacement` (`$1`-style group references)
    Literal {
        pattern: Regex,
        replacement: &'static str,
    },
    /// Run `transform` over the text; `pattern` only gates reporting
    Transform {
        pattern: Regex,
        transform: fn(&str) -> String,
    },
}

impl FixRule {
    fn literal(pattern: &str, replacement: &'static str) -> Self {
        FixRule::Literal {
            pattern: Regex::new(pattern).expect("built-in pattern must compile"),
            replacement,
        }
    }

    fn transform(pattern: &str, transform: fn(&str) -> String) -> Self {
        FixRule::Transform {
            pattern: Regex::new(pattern).expect("built-in pattern must compile"),
            transform,
        }
    }

    pub fn pattern(&self) -> &Regex {
        match self {
            FixRule::Literal { pattern, .. } | FixRule::Transform { pattern, .. } => pattern,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            FixRule::Literal {
                pattern,
                replacement,
            } => pattern.replace_all(text, *replacement).into_owned(),
            FixRule::Transform { transform, .. } => transform(text),
        }
    }
}

pub(crate) struct ImprovementRules {
    pub category: FixCategory,
    pub python: Vec<FixRule>,
    pub javascript: Vec<FixRule>,
}

impl ImprovementRules {
    pub fn for_language(&self, language: &Language) -> &[FixRule] {
        match language {
            Language::Python => &self.python,
            Language::JavaScript => &self.javascript,
            Language::Java | Language::Other(_) => &[],
        }
    }
}

static TABLE: OnceLock<Vec<ImprovementRules>> = OnceLock::new();

/// Categories in application order
pub(crate) fn improvement_table() -> &'static [ImprovementRules] {
    TABLE.get_or_init(|| {
        vec![
            ImprovementRules {
                category: FixCategory::CodeStyle,
                python: vec![
                    // "%s" % (x) and "%s" % x become f-strings
                    FixRule::literal(r#""%s" % \(([^)]+)\)"#, r#"f"{${1}}""#),
                    FixRule::literal(r#""%s" % ([^,]+)"#, r#"f"{${1}}""#),
                ],
                javascript: Vec::new(),
            },
            ImprovementRules {
                category: FixCategory::Performance,
                python: vec![FixRule::transform(
                    r"for [^:]+ in \[.*\]:",
                    optimize_list_comprehension,
                )],
                javascript: Vec::new(),
            },
            ImprovementRules {
                category: FixCategory::BestPractices,
                python: vec![FixRule::transform(r"def main\(\):", add_main_guard)],
                javascript: vec![FixRule::transform(r"function", add_use_strict)],
            },
        ]
    })
}

// Loops over literal lists are reported but not rewritten yet
fn optimize_list_comprehension(text: &str) -> String {
    text.to_string()
}

fn add_main_guard(text: &str) -> String {
    if text.contains("def main():") && !text.contains(r#"__name__ == "__main__""#) {
        format!("{text}\n\nif __name__ == \"__main__\":\n    main()\n")
    } else {
        text.to_string()
    }
}

fn add_use_strict(text: &str) -> String {
    if text.contains(r#""use strict";"#) || text.contains("'use strict';") {
        text.to_string()
    } else {
        format!("\"use strict\";\n{text}")
    }
}
