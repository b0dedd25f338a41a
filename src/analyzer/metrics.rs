//! Metric calculation: size counts, simplified cyclomatic complexity,
//! readability, maintainability and performance.

use super::patterns::{global_patterns, PatternId, PatternTable};
use crate::CodeMetrics;

/// Lines longer than this cost readability
const READABLE_LINE_LENGTH: usize = 80;
/// Leading whitespace beyond this costs readability
const MAX_COMFORTABLE_INDENT: usize = 12;
/// Comment-line ratio below which readability is penalized
const MIN_COMMENT_RATIO: f64 = 0.1;
/// Programs longer than this lose maintainability
const LARGE_PROGRAM_LINES: usize = 50;

const BRANCH_PATTERNS: [PatternId; 8] = [
    PatternId::IfBranch,
    PatternId::ElseBranch,
    PatternId::ForLoop,
    PatternId::WhileLoop,
    PatternId::SwitchStatement,
    PatternId::CaseClause,
    PatternId::CatchClause,
    PatternId::LogicalOperator,
];

/// Calculator for code metrics
pub struct MetricCalculator;

impl MetricCalculator {
    /// Calculate every metric for `source`
    pub fn calculate(source: &str) -> CodeMetrics {
        let patterns = global_patterns();
        let lines: Vec<&str> = source
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();
        let lines_of_code = lines.len();

        // Overlapping forms are counted once per pattern
        let functions = patterns.count(PatternId::NamedFunction, source)
            + patterns.count(PatternId::FunctionExpression, source)
            + patterns.count(PatternId::ArrowFunction, source);
        let variables = patterns.count(PatternId::Declaration, source);

        let complexity = Self::complexity(patterns, source);
        let readability = Self::readability(patterns, source, &lines);
        let maintainability = Self::maintainability(complexity, lines_of_code);
        let performance = Self::performance(source);

        CodeMetrics {
            complexity,
            readability,
            maintainability,
            performance,
            test_coverage: 0,
            lines_of_code,
            functions,
            variables,
        }
    }

    /// 1 plus one per branch keyword and per `&&`/`||`
    pub fn complexity(patterns: &PatternTable, source: &str) -> u32 {
        let branches: usize = BRANCH_PATTERNS
            .iter()
            .map(|id| patterns.count(*id, source))
            .sum();
        1 + branches as u32
    }

    /// Readability over the non-blank `lines`, clamped to 0-100
    pub fn readability(patterns: &PatternTable, source: &str, lines: &[&str]) -> f64 {
        let mut score = 100.0;

        let long_lines = lines
            .iter()
            .filter(|line| line.chars().count() > READABLE_LINE_LENGTH)
            .count();
        score -= long_lines as f64 * 2.0;

        // No ratio (and no penalty) without any lines
        if !lines.is_empty() {
            let comment_lines = lines
                .iter()
                .filter(|line| line.trim().starts_with("//"))
                .count();
            let ratio = comment_lines as f64 / lines.len() as f64;
            if ratio < MIN_COMMENT_RATIO {
                score -= 10.0;
            }
        }

        let max_indent = lines
            .iter()
            .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
            .max()
            .unwrap_or(0);
        if max_indent > MAX_COMFORTABLE_INDENT {
            score -= (max_indent - MAX_COMFORTABLE_INDENT) as f64 * 2.0;
        }

        // Lowercase runs are not boundary-anchored, so the ratio can exceed 1
        let lowercase = patterns.count(PatternId::LowercaseIdentifier, source);
        let total = patterns.count(PatternId::Identifier, source);
        let naming_consistency = if total > 0 {
            lowercase as f64 / total as f64
        } else {
            1.0
        };
        score += naming_consistency * 10.0;

        score.clamp(0.0, 100.0)
    }

    pub fn maintainability(complexity: u32, lines_of_code: usize) -> u8 {
        let size_penalty = if lines_of_code > LARGE_PROGRAM_LINES { 10 } else { 0 };
        let value = 100 - 2 * complexity as i64 - size_penalty;
        value.clamp(0, 100) as u8
    }

    pub fn performance(source: &str) -> u8 {
        let mut score: i32 = 100;

        if source.contains("for") && source.contains(".length") {
            score -= 5;
        }
        if source.contains("+=") && source.contains('"') {
            score -= 10;
        }
        if source.contains("eval(") {
            score -= 20;
        }
        if source.contains("with(") {
            score -= 15;
        }

        if source.contains(".map(") || source.contains(".filter(") || source.contains(".reduce(")
        {
            score += 5;
        }
        if source.contains("const ") {
            score += 2;
        }

        score.clamp(0, 100) as u8
    }
}
