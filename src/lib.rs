//! codescope - regex-driven code analysis
//!
//! Each component is a pure function over a source text and a language tag:
//!
//! - [`parsers::analyze`] extracts functions, classes, imports and comments
//! - [`scoring::score`] derives a 0-100 quality score with issues
//! - [`detectors::scan`] matches a vulnerability catalog and scores security
//! - [`fixes::suggest_fixes`] maps findings to canned remediations
//! - [`refactor::apply_fixes`] rewrites a file with security fixes and
//!   style rules
//! - [`testgen::synthesize`] turns analysis into placeholder tests
//!
//! Nothing is parsed for real. Unknown languages fall back to generic
//! patterns and no component fails on text input.

pub mod cli;
pub mod config;
pub mod detectors;
pub mod fixes;
pub mod models;
pub mod parsers;
pub mod refactor;
pub mod reporters;
pub mod scoring;
pub mod testgen;

pub use detectors::scan;
pub use fixes::suggest_fixes;
pub use models::*;
pub use parsers::{analyze, Language};
pub use refactor::{apply_fixes, generate_refactored_code};
pub use scoring::score;
pub use testgen::{recommend_tests, synthesize};
