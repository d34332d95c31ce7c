//! Regex-driven structural analysis
//!
//! Each supported language contributes a [`LanguagePatterns`] table of
//! compiled, line-anchored expressions. A single extraction pass walks the
//! `\n`-separated lines and applies the table:
//!
//! - functions: first pattern that matches wins, unless the line contains
//!   one of the language's exclusion substrings
//! - classes: first pattern that matches wins
//! - imports: every matching pattern contributes
//! - comments: every match of every pattern contributes
//!
//! There is no grammar here. Parameter lists are split on commas without
//! tracking bracket depth, so `fn(a: Map<K, V>)` yields two parameters.

mod generic;
mod java;
mod javascript;
mod python;

use crate::models::{line_count, AnalysisResult, ClassInfo, ClassKind, CommentInfo, FunctionInfo};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Declared language of a source text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    /// Anything else; analyzed with the generic patterns
    Other(String),
}

impl Language {
    /// Parse a language tag. Case-insensitive, never fails.
    pub fn parse(tag: &str) -> Self {
        let lower = tag.trim().to_lowercase();
        match lower.as_str() {
            "python" | "py" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            "java" => Language::Java,
            _ => Language::Other(lower),
        }
    }

    /// Infer the language from a file extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "py" | "pyi" => Language::Python,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "java" => Language::Java,
            _ => Language::Other(ext),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Other(tag) => tag,
        }
    }

    fn patterns(&self) -> &'static LanguagePatterns {
        match self {
            Language::Python => python::patterns(),
            Language::JavaScript => javascript::patterns(),
            Language::Java => java::patterns(),
            Language::Other(_) => generic::patterns(),
        }
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::parse(s))
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Language::parse(tag)
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Language::parse(&tag)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.as_str().to_string()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled detection patterns for one language.
///
/// Named groups carry the captured fields: `name` and `params` for
/// functions, `name`, `parent` and `kind` for classes, `import` for
/// imports and `text` for comments. Optional groups may be absent.
pub(crate) struct LanguagePatterns {
    pub functions: Vec<Regex>,
    /// A function match is discarded when the line contains any of these
    pub function_excludes: &'static [&'static str],
    pub classes: Vec<Regex>,
    pub imports: Vec<Regex>,
    pub comments: Vec<Regex>,
}

/// Compile a built-in pattern list
pub(crate) fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|src| Regex::new(src).expect("built-in pattern must compile"))
        .collect()
}

/// Extract functions, classes, imports and comments from `text`
pub fn analyze(text: &str, language: &Language) -> AnalysisResult {
    let patterns = language.patterns();
    let mut result = AnalysisResult {
        lines_of_code: line_count(text),
        ..Default::default()
    };

    for (idx, line) in text.split('\n').enumerate() {
        let line_number = idx + 1;

        if let Some(function) = match_function(patterns, line, line_number) {
            result.functions.push(function);
        }
        if let Some(class) = match_class(patterns, line, line_number) {
            result.classes.push(class);
        }
        for re in &patterns.imports {
            if let Some(m) = re.captures(line).and_then(|caps| caps.name("import")) {
                result.imports.push(m.as_str().to_string());
            }
        }
        for re in &patterns.comments {
            for caps in re.captures_iter(line) {
                let text = caps.name("text").map(|m| m.as_str()).unwrap_or("");
                result.comments.push(CommentInfo {
                    text: text.trim().to_string(),
                    line_number,
                });
            }
        }
    }

    result.complexity = result.functions.len() + result.classes.len();

    debug!(
        "Analyzed {} lines as {}: {} functions, {} classes, {} imports, {} comments",
        result.lines_of_code,
        language,
        result.functions.len(),
        result.classes.len(),
        result.imports.len(),
        result.comments.len()
    );

    result
}

fn match_function(
    patterns: &LanguagePatterns,
    line: &str,
    line_number: usize,
) -> Option<FunctionInfo> {
    let caps = patterns.functions.iter().find_map(|re| re.captures(line))?;
    if patterns.function_excludes.iter().any(|kw| line.contains(kw)) {
        return None;
    }

    let name = caps.name("name")?.as_str().to_string();
    let parameters = caps
        .name("params")
        .map(|m| m.as_str())
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.split(',').map(str::to_string).collect())
        .unwrap_or_default();

    Some(FunctionInfo {
        name,
        parameters,
        line_number,
    })
}

fn match_class(patterns: &LanguagePatterns, line: &str, line_number: usize) -> Option<ClassInfo> {
    let caps = patterns.classes.iter().find_map(|re| re.captures(line))?;

    Some(ClassInfo {
        name: caps.name("name")?.as_str().to_string(),
        parent_class: caps.name("parent").map(|m| m.as_str().to_string()),
        kind: caps
            .name("kind")
            .and_then(|m| ClassKind::from_keyword(m.as_str())),
        line_number,
    })
}
