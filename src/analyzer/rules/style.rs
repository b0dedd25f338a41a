//! Style and best-practice checks: `var`, leftover `console.log`, long lines,
//! magic numbers.

use super::{char_column, Scanner};
use crate::analyzer::patterns::{global_patterns, PatternId};
use crate::{CodeWarning, Rule, WarningCategory};

/// Lines longer than this (in characters) are reported
pub const MAX_LINE_LENGTH: usize = 100;

/// Scanner producing style warnings
pub struct StyleScanner;

impl StyleScanner {
    pub fn new() -> Self {
        Self
    }

    fn warning(
        rule: Rule,
        category: WarningCategory,
        line_no: usize,
        column: usize,
        message: &str,
        suggestion: &str,
    ) -> CodeWarning {
        CodeWarning {
            id: rule.finding_id(Some(line_no)),
            rule,
            category,
            message: message.to_string(),
            line: line_no,
            column,
            suggestion: suggestion.to_string(),
        }
    }
}

impl Default for StyleScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for StyleScanner {
    type Finding = CodeWarning;

    fn name(&self) -> &'static str {
        "style"
    }

    fn scan(&self, _source: &str, lines: &[&str]) -> Vec<CodeWarning> {
        let patterns = global_patterns();
        let mut warnings = Vec::new();

        for (zero_indexed, line) in lines.iter().enumerate() {
            let line_no = zero_indexed + 1;

            if line.contains("var ") {
                // Column points at the first "var", which may precede the "var " hit
                let idx = line.find("var").unwrap_or(0);
                warnings.push(Self::warning(
                    Rule::PreferLetConst,
                    WarningCategory::BestPractice,
                    line_no,
                    char_column(line, idx),
                    "Use 'let' or 'const' instead of 'var'",
                    "Replace 'var' with 'let' for mutable variables or 'const' for constants",
                ));
            }

            if let Some(idx) = line.find("console.log") {
                warnings.push(Self::warning(
                    Rule::ConsoleLog,
                    WarningCategory::BestPractice,
                    line_no,
                    char_column(line, idx),
                    "Remove console.log statements from production code",
                    "Use proper logging or remove debug statements",
                ));
            }

            if line.chars().count() > MAX_LINE_LENGTH {
                warnings.push(Self::warning(
                    Rule::LineTooLong,
                    WarningCategory::Style,
                    line_no,
                    MAX_LINE_LENGTH,
                    "Line too long (>100 characters)",
                    "Break long lines for better readability",
                ));
            }

            // One warning per line, even with several magic numbers
            if let Some(idx) = patterns.first_match(PatternId::MagicNumber, line) {
                warnings.push(Self::warning(
                    Rule::MagicNumber,
                    WarningCategory::BestPractice,
                    line_no,
                    char_column(line, idx),
                    "Consider using named constants for magic numbers",
                    "Define constants with meaningful names",
                ));
            }
        }

        warnings
    }
}
