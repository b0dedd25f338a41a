//! Score calculation for code quality

use crate::{CodeError, CodeMetrics, CodeSuggestion, CodeWarning, Rating, Severity};

/// Penalty points per finding, applied before averaging with the metrics
const PENALTY_PER_ERROR: f64 = 10.0;
const PENALTY_PER_SEVERITY_WARNING: f64 = 5.0;
const PENALTY_PER_STYLE_WARNING: f64 = 2.0;

/// Metric level below which a recommendation is made
const RECOMMENDATION_THRESHOLD: f64 = 70.0;
const HIGH_COMPLEXITY: u32 = 10;

/// Calculator for the aggregate quality score
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Combine findings and metrics into a 0-100 score.
    ///
    /// Errors cost 10 (severity error) or 5 (severity warning), style warnings
    /// cost 2; suggestions are free. The result is then averaged with
    /// readability, maintainability and performance.
    pub fn calculate(
        errors: &[CodeError],
        warnings: &[CodeWarning],
        _suggestions: &[CodeSuggestion],
        metrics: &CodeMetrics,
    ) -> u8 {
        let hard_errors = errors
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .count() as f64;
        let soft_errors = errors
            .iter()
            .filter(|e| e.severity == Severity::Warning)
            .count() as f64;

        let mut score = 100.0;
        score -= hard_errors * PENALTY_PER_ERROR;
        score -= soft_errors * PENALTY_PER_SEVERITY_WARNING;
        score -= warnings.len() as f64 * PENALTY_PER_STYLE_WARNING;

        score = (score
            + metrics.readability
            + metrics.maintainability as f64
            + metrics.performance as f64)
            / 4.0;

        score.round().clamp(0.0, 100.0) as u8
    }

    /// Get a description of the rating
    pub fn rating_description(rating: Rating) -> &'static str {
        match rating {
            Rating::Good => "Good - Code is clean and easy to follow",
            Rating::Fair => "Fair - Code works but has room for improvement",
            Rating::Poor => "Poor - Code has significant quality issues",
        }
    }

    /// Get recommendations based on metric levels
    pub fn recommendations(metrics: &CodeMetrics) -> Vec<String> {
        let mut recs = Vec::new();

        if metrics.readability < RECOMMENDATION_THRESHOLD {
            recs.push(
                "Improve readability: shorten long lines, reduce nesting and add comments"
                    .to_string(),
            );
        }

        if (metrics.maintainability as f64) < RECOMMENDATION_THRESHOLD {
            recs.push("Split large functions into smaller, focused ones".to_string());
        }

        if (metrics.performance as f64) < RECOMMENDATION_THRESHOLD {
            recs.push("Avoid eval() and with(); prefer array methods over manual loops".to_string());
        }

        if metrics.complexity > HIGH_COMPLEXITY {
            recs.push("Reduce branching: extract conditions into well-named helpers".to_string());
        }

        if recs.is_empty() {
            recs.push("Code is in good shape! Keep functions small and focused.".to_string());
        }

        recs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorCategory, Rule, WarningCategory};

    fn metrics(readability: f64, maintainability: u8, performance: u8) -> CodeMetrics {
        CodeMetrics {
            complexity: 1,
            readability,
            maintainability,
            performance,
            test_coverage: 0,
            lines_of_code: 1,
            functions: 0,
            variables: 0,
        }
    }

    fn error(severity: Severity) -> CodeError {
        CodeError {
            id: "syntax_1_1".to_string(),
            rule: Rule::MissingParentheses,
            category: ErrorCategory::Syntax,
            message: "e".to_string(),
            line: 1,
            column: 0,
            severity,
            fix: None,
        }
    }

    fn warning() -> CodeWarning {
        CodeWarning {
            id: "style_1_1".to_string(),
            rule: Rule::PreferLetConst,
            category: WarningCategory::BestPractice,
            message: "w".to_string(),
            line: 1,
            column: 0,
            suggestion: "s".to_string(),
        }
    }

    #[test]
    fn perfect_metrics_no_findings_is_100() {
        assert_eq!(
            ScoreCalculator::calculate(&[], &[], &[], &metrics(100.0, 100, 100)),
            100
        );
    }

    #[test]
    fn zero_metrics_no_findings_averages_to_quarter() {
        let expected = ((100.0 + 0.0 + 0.0 + 0.0) / 4.0_f64).round() as u8;
        assert_eq!(
            ScoreCalculator::calculate(&[], &[], &[], &metrics(0.0, 0, 0)),
            expected
        );
    }

    #[test]
    fn errors_and_warnings_reduce_score() {
        let errors = vec![error(Severity::Error), error(Severity::Warning)];
        let warnings = vec![warning(), warning()];
        // 100 - 10 - 5 - 4 = 81; (81 + 100 + 100 + 100) / 4 = 95.25
        assert_eq!(
            ScoreCalculator::calculate(&errors, &warnings, &[], &metrics(100.0, 100, 100)),
            95
        );
    }

    #[test]
    fn info_errors_cost_nothing() {
        let errors = vec![error(Severity::Info)];
        assert_eq!(
            ScoreCalculator::calculate(&errors, &[], &[], &metrics(100.0, 100, 100)),
            100
        );
    }

    #[test]
    fn heavy_penalties_clamp_to_zero() {
        let errors: Vec<CodeError> = (0..50).map(|_| error(Severity::Error)).collect();
        assert_eq!(
            ScoreCalculator::calculate(&errors, &[], &[], &metrics(0.0, 0, 0)),
            0
        );
    }

    #[test]
    fn half_points_round_up() {
        // (100 + 100 + 98 + 100) / 4 = 99.5
        assert_eq!(
            ScoreCalculator::calculate(&[], &[], &[], &metrics(100.0, 98, 100)),
            100
        );
    }

    #[test]
    fn recommendations_for_weak_metrics() {
        let mut m = metrics(50.0, 50, 50);
        m.complexity = 20;
        let recs = ScoreCalculator::recommendations(&m);
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("readability"));
        assert!(recs[3].contains("branching"));
    }

    #[test]
    fn recommendations_for_healthy_metrics() {
        let recs = ScoreCalculator::recommendations(&metrics(95.0, 95, 95));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("good shape"));
    }

    #[test]
    fn rating_description_all_bands() {
        assert!(ScoreCalculator::rating_description(Rating::Good).starts_with("Good"));
        assert!(ScoreCalculator::rating_description(Rating::Fair).starts_with("Fair"));
        assert!(ScoreCalculator::rating_description(Rating::Poor).starts_with("Poor"));
    }
}
