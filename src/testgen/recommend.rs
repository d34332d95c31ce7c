use crate::models::{AnalysisResult, Priority, TestKind, TestRecommendation};

/// Function names containing any of these get an extra API test
const API_KEYWORDS: &[&str] = &["api", "http", "request", "fetch"];

/// Suggest tests for every detected function and class.
///
/// Unit tests for functions come first, then integration tests for
/// classes, then API tests for functions that look like HTTP handlers.
pub fn recommend_tests(analysis: &AnalysisResult) -> Vec<TestRecommendation> {
    let mut recommendations = Vec::new();

    for func in &analysis.functions {
        recommendations.push(TestRecommendation {
            kind: TestKind::UnitTest,
            target: format!("function {}", func.name),
            priority: Priority::High,
            description: format!(
                "Create unit tests for function '{}' at line {}",
                func.name, func.line_number
            ),
        });
    }

    for cls in &analysis.classes {
        recommendations.push(TestRecommendation {
            kind: TestKind::IntegrationTest,
            target: format!("class {}", cls.name),
            priority: Priority::Medium,
            description: format!(
                "Create integration tests for class '{}' at line {}",
                cls.name, cls.line_number
            ),
        });
    }

    for func in analysis.functions.iter().filter(|f| is_api_like(&f.name)) {
        recommendations.push(TestRecommendation {
            kind: TestKind::ApiTest,
            target: format!("function {}", func.name),
            priority: Priority::High,
            description: format!(
                "Create API tests for function '{}' at line {}",
                func.name, func.line_number
            ),
        });
    }

    recommendations
}

fn is_api_like(name: &str) -> bool {
    let lower = name.to_lowercase();
    API_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{analyze, Language};

    #[test]
    fn test_recommendation_order_and_wording() {
        let src = "class Client:\n    def fetch_user(self, id):\n        pass\n\ndef helper():\n    pass\n";
        let analysis = analyze(src, &Language::Python);
        let recs = recommend_tests(&analysis);

        let kinds: Vec<_> = recs.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TestKind::UnitTest,
                TestKind::UnitTest,
                TestKind::IntegrationTest,
                TestKind::ApiTest
            ]
        );
        assert_eq!(recs[0].target, "function fetch_user");
        assert_eq!(
            recs[0].description,
            "Create unit tests for function 'fetch_user' at line 2"
        );
        assert_eq!(recs[2].target, "class Client");
        assert_eq!(recs[2].priority, Priority::Medium);
        assert_eq!(
            recs[3].description,
            "Create API tests for function 'fetch_user' at line 2"
        );
    }

    #[test]
    fn test_api_keywords_case_insensitive() {
        assert!(is_api_like("handleHTTPError"));
        assert!(is_api_like("get_api_key"));
        assert!(is_api_like("RequestBuilder"));
        assert!(!is_api_like("parse_config"));
    }

    #[test]
    fn test_empty_analysis() {
        assert!(recommend_tests(&AnalysisResult::default()).is_empty());
    }
}
