use crate::config::QualityConfig;
use crate::models::{
    AnalysisResult, Issue, IssueSeverity, IssueType, QualityReport, Recommendation,
    RecommendationType,
};
use crate::parsers::{analyze, Language};
use tracing::debug;

/// Analyze `text` and score it with the built-in thresholds
pub fn score(text: &str, language: &Language) -> QualityReport {
    score_with(text, language, &QualityConfig::default())
}

/// Analyze `text` and score it with custom thresholds
pub fn score_with(text: &str, language: &Language, config: &QualityConfig) -> QualityReport {
    let analysis = analyze(text, language);
    score_analysis(analysis, config)
}

pub(crate) fn score_analysis(analysis: AnalysisResult, config: &QualityConfig) -> QualityReport {
    let mut score: i64 = 100;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if analysis.complexity > config.complexity_threshold {
        score -= i64::from(config.complexity_penalty);
        issues.push(Issue {
            issue_type: IssueType::Complexity,
            message: format!(
                "High code complexity detected ({} functions/classes)",
                analysis.complexity
            ),
            severity: IssueSeverity::Warning,
        });
        recommendations.push(Recommendation {
            recommendation_type: RecommendationType::Refactor,
            message: "Consider refactoring to reduce complexity".to_string(),
        });
    }

    let expected_comments = (analysis.functions.len() / 3).max(1);
    if analysis.comments.len() < expected_comments {
        score -= i64::from(config.documentation_penalty);
        issues.push(Issue {
            issue_type: IssueType::Documentation,
            message: "Insufficient comments for code documentation".to_string(),
            severity: IssueSeverity::Warning,
        });
        recommendations.push(Recommendation {
            recommendation_type: RecommendationType::Documentation,
            message: "Add more comments to explain complex logic".to_string(),
        });
    }

    let long_signatures = analysis
        .functions
        .iter()
        .filter(|f| f.parameters.len() > config.max_parameters)
        .count();
    if long_signatures > 0 {
        score -= i64::from(config.parameter_penalty);
        issues.push(Issue {
            issue_type: IssueType::FunctionParameters,
            message: format!("{} functions have too many parameters", long_signatures),
            severity: IssueSeverity::Warning,
        });
        recommendations.push(Recommendation {
            recommendation_type: RecommendationType::Refactor,
            message: "Consider reducing function parameters by using objects or refactoring"
                .to_string(),
        });
    }

    let quality_score = score.clamp(0, 100) as u32;
    debug!(
        "Quality score {} ({} issues)",
        quality_score,
        issues.len()
    );

    QualityReport {
        structure_analysis: analysis,
        quality_score,
        issues,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn many_functions(count: usize, params: &str) -> String {
        (0..count)
            .map(|i| format!("def f{i}({params}):\n    pass\n"))
            .collect()
    }

    #[test]
    fn test_clean_file_scores_100() {
        let report = score("# add two numbers\ndef add(a, b):\n    return a + b\n", &Language::Python);
        assert_eq!(report.quality_score, 100);
        assert!(report.issues.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_missing_comments_costs_10() {
        let report = score("def add(a, b):\n    return a + b\n", &Language::Python);
        assert_eq!(report.quality_score, 90);
        assert_eq!(report.issues[0].issue_type, IssueType::Documentation);
        assert_eq!(
            report.recommendations[0].recommendation_type,
            RecommendationType::Documentation
        );
    }

    #[test]
    fn test_empty_file_needs_one_comment() {
        let report = score("", &Language::Python);
        assert_eq!(report.quality_score, 90);
    }

    #[test]
    fn test_all_deductions_in_order() {
        let src = many_functions(21, "a, b, c, d, e, f");
        let report = score(&src, &Language::Python);

        assert_eq!(report.quality_score, 100 - 20 - 10 - 15);
        let kinds: Vec<_> = report.issues.iter().map(|i| i.issue_type).collect();
        assert_eq!(
            kinds,
            vec![
                IssueType::Complexity,
                IssueType::Documentation,
                IssueType::FunctionParameters
            ]
        );
        assert_eq!(report.issues[2].message, "21 functions have too many parameters");
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(
            report.recommendations[0].recommendation_type,
            RecommendationType::Refactor
        );
    }

    #[test]
    fn test_complexity_threshold_is_exclusive() {
        let mut src = many_functions(20, "");
        src.push_str(&"# c\n".repeat(10));
        assert_eq!(score(&src, &Language::Python).quality_score, 100);

        src.push_str("def one_more():\n");
        assert_eq!(score(&src, &Language::Python).quality_score, 80);
    }

    #[test]
    fn test_five_parameters_is_fine() {
        let src = "# doc\ndef f(a, b, c, d, e):\n";
        assert_eq!(score(src, &Language::Python).quality_score, 100);
    }

    #[test]
    fn test_score_never_negative() {
        let config = QualityConfig {
            documentation_penalty: 500,
            ..Default::default()
        };
        let report = score_with("x = 1\n", &Language::Python, &config);
        assert_eq!(report.quality_score, 0);
    }

    #[test]
    fn test_score_monotonic_as_conditions_accumulate() {
        let documented = "# c\ndef f(a):\n";
        let undocumented = "def f(a):\n";
        let undocumented_wide = "def f(a, b, c, d, e, f):\n";

        let a = score(documented, &Language::Python).quality_score;
        let b = score(undocumented, &Language::Python).quality_score;
        let c = score(undocumented_wide, &Language::Python).quality_score;
        assert!(a >= b && b >= c);
        assert!(c <= 100);
    }
}
