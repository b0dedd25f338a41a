//! Codelens: heuristic code quality analyzer
//!
//! This library inspects a snippet of JavaScript-like source text with
//! line-oriented pattern matching and produces detected issues, improvement
//! suggestions, quality metrics and an aggregate 0-100 score.

pub mod analyzer;
pub mod config;
pub mod debugging;
pub mod progress;
pub mod reporter;

use serde::{Deserialize, Serialize};

/// The full result of analyzing a block of source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Syntax-level problems
    pub errors: Vec<CodeError>,
    /// Style and best-practice problems
    pub warnings: Vec<CodeWarning>,
    /// Optimization and refactoring ideas
    pub suggestions: Vec<CodeSuggestion>,
    /// Quantitative measures of the text
    pub metrics: CodeMetrics,
    /// Aggregate quality score (0-100)
    pub score: u8,
}

impl AnalysisResult {
    pub fn rating(&self) -> Rating {
        Rating::from_score(self.score)
    }

    /// Number of errors and warnings combined (suggestions excluded)
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

/// A syntax problem found by the syntax scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeError {
    pub id: String,
    pub rule: Rule,
    #[serde(rename = "type")]
    pub category: ErrorCategory,
    pub message: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column (0-indexed, in characters)
    pub column: usize,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

/// A style or best-practice problem found by the style scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeWarning {
    pub id: String,
    pub rule: Rule,
    #[serde(rename = "type")]
    pub category: WarningCategory,
    pub message: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column (0-indexed, in characters)
    pub column: usize,
    pub suggestion: String,
}

/// A whole-text improvement idea found by the performance scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSuggestion {
    pub id: String,
    pub rule: Rule,
    #[serde(rename = "type")]
    pub category: SuggestionCategory,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub before: String,
    pub after: String,
    pub explanation: String,
}

/// Quantitative measures derived from the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMetrics {
    /// Simplified cyclomatic complexity (>= 1, no upper bound)
    pub complexity: u32,
    /// Readability (0-100). Fractional because of the naming-consistency bonus.
    pub readability: f64,
    /// Maintainability (0-100)
    pub maintainability: u8,
    /// Performance (0-100)
    pub performance: u8,
    /// Reserved; no code is executed so this is always 0
    pub test_coverage: u8,
    /// Non-blank lines
    pub lines_of_code: usize,
    pub functions: usize,
    pub variables: usize,
}

/// Severity levels for syntax findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Syntax,
    Runtime,
    Logic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningCategory {
    Style,
    Performance,
    BestPractice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Improvement,
    Optimization,
    Refactor,
}

/// Analysis rules, one per check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    MissingParentheses,
    MissingSemicolon,
    UnmatchedBrackets,
    PreferLetConst,
    ConsoleLog,
    LineTooLong,
    MagicNumber,
    CacheArrayLength,
    StringConcatInLoop,
    PreferArrayMethods,
}

impl Rule {
    pub const ALL: [Rule; 10] = [
        Rule::MissingParentheses,
        Rule::MissingSemicolon,
        Rule::UnmatchedBrackets,
        Rule::PreferLetConst,
        Rule::ConsoleLog,
        Rule::LineTooLong,
        Rule::MagicNumber,
        Rule::CacheArrayLength,
        Rule::StringConcatInLoop,
        Rule::PreferArrayMethods,
    ];

    /// Position of the check within its scanner; used to build finding ids
    pub fn ordinal(&self) -> u8 {
        match self {
            Rule::MissingParentheses | Rule::PreferLetConst | Rule::CacheArrayLength => 1,
            Rule::MissingSemicolon | Rule::ConsoleLog | Rule::StringConcatInLoop => 2,
            Rule::UnmatchedBrackets | Rule::LineTooLong | Rule::PreferArrayMethods => 3,
            Rule::MagicNumber => 4,
        }
    }

    /// Deterministic finding id: `<prefix>_<line>_<ordinal>` or `<prefix>_<ordinal>`
    pub fn finding_id(&self, line: Option<usize>) -> String {
        let prefix = match self {
            Rule::MissingParentheses | Rule::MissingSemicolon | Rule::UnmatchedBrackets => {
                "syntax"
            }
            Rule::PreferLetConst | Rule::ConsoleLog | Rule::LineTooLong | Rule::MagicNumber => {
                "style"
            }
            Rule::CacheArrayLength | Rule::StringConcatInLoop | Rule::PreferArrayMethods => "perf",
        };
        match line {
            Some(line) => format!("{}_{}_{}", prefix, line, self.ordinal()),
            None => format!("{}_{}", prefix, self.ordinal()),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingParentheses => write!(f, "missing-parentheses"),
            Rule::MissingSemicolon => write!(f, "missing-semicolon"),
            Rule::UnmatchedBrackets => write!(f, "unmatched-brackets"),
            Rule::PreferLetConst => write!(f, "prefer-let-const"),
            Rule::ConsoleLog => write!(f, "console-log"),
            Rule::LineTooLong => write!(f, "line-too-long"),
            Rule::MagicNumber => write!(f, "magic-number"),
            Rule::CacheArrayLength => write!(f, "cache-array-length"),
            Rule::StringConcatInLoop => write!(f, "string-concat-in-loop"),
            Rule::PreferArrayMethods => write!(f, "prefer-array-methods"),
        }
    }
}

/// Coarse rating band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Rating::Good,
            60..=79 => Rating::Fair,
            _ => Rating::Poor,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Good => write!(f, "Good"),
            Rating::Fair => write!(f, "Fair"),
            Rating::Poor => write!(f, "Poor"),
        }
    }
}

/// Public API: analyze a block of source text with the default configuration.
///
/// Pure and deterministic; the same text always yields the same result.
pub fn analyze(text: &str) -> AnalysisResult {
    analyzer::AnalysisEngine::new().analyze_source(text)
}

pub use debugging::{debugging_tips, suggested_test_cases, DebuggingGuidance, TestCaseSuggestion};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_ids_are_deterministic() {
        assert_eq!(Rule::MissingSemicolon.finding_id(Some(4)), "syntax_4_2");
        assert_eq!(Rule::MagicNumber.finding_id(Some(1)), "style_1_4");
        assert_eq!(Rule::PreferArrayMethods.finding_id(None), "perf_3");
    }

    #[test]
    fn rule_display_matches_serde_name() {
        for rule in Rule::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule));
        }
    }

    #[test]
    fn rating_bands() {
        assert_eq!(Rating::from_score(100), Rating::Good);
        assert_eq!(Rating::from_score(80), Rating::Good);
        assert_eq!(Rating::from_score(79), Rating::Fair);
        assert_eq!(Rating::from_score(60), Rating::Fair);
        assert_eq!(Rating::from_score(59), Rating::Poor);
        assert_eq!(Rating::from_score(0), Rating::Poor);
    }

    #[test]
    fn categories_serialize_like_the_ui_expects() {
        assert_eq!(
            serde_json::to_string(&WarningCategory::BestPractice).unwrap(),
            "\"best-practice\""
        );
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
    }
}
