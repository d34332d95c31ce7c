//! Quality scoring
//!
//! Derives a 0-100 quality score from structural analysis output.
//!
//! # Scoring Formula
//!
//! ```text
//! score = 100
//!       - 20  if complexity > 20
//!       - 10  if comments < max(1, functions / 3)
//!       - 15  if any function takes more than 5 parameters
//! score = max(0, score)
//! ```
//!
//! Deductions are independent and combine. Thresholds and deductions can be
//! overridden through [`QualityConfig`](crate::config::QualityConfig).

mod quality;

pub use quality::{score, score_with};
