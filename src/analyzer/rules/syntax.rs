//! Syntax heuristics: missing parentheses, missing semicolons, unmatched braces.
//!
//! Brace matching is deliberately per line, not a running balance. Any line that
//! opens or closes a multi-line block on its own is reported.

use super::{char_column, Scanner};
use crate::analyzer::patterns::{global_patterns, PatternId};
use crate::{CodeError, ErrorCategory, Rule, Severity};

/// Scanner producing syntax errors
pub struct SyntaxScanner;

impl SyntaxScanner {
    pub fn new() -> Self {
        Self
    }

    fn error(
        rule: Rule,
        line_no: usize,
        column: usize,
        message: &str,
        severity: Severity,
        fix: &str,
    ) -> CodeError {
        CodeError {
            id: rule.finding_id(Some(line_no)),
            rule,
            category: ErrorCategory::Syntax,
            message: message.to_string(),
            line: line_no,
            column,
            severity,
            fix: Some(fix.to_string()),
        }
    }
}

impl Default for SyntaxScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for SyntaxScanner {
    type Finding = CodeError;

    fn name(&self) -> &'static str {
        "syntax"
    }

    fn scan(&self, _source: &str, lines: &[&str]) -> Vec<CodeError> {
        let patterns = global_patterns();
        let mut errors = Vec::new();

        for (zero_indexed, line) in lines.iter().enumerate() {
            let line_no = zero_indexed + 1;

            if let Some(idx) = line.find("function") {
                if !line.contains('(') {
                    errors.push(Self::error(
                        Rule::MissingParentheses,
                        line_no,
                        char_column(line, idx),
                        "Function declaration missing parentheses",
                        Severity::Error,
                        "Add parentheses after function name: function name()",
                    ));
                }
            }

            if patterns.is_match(PatternId::UnterminatedStatement, line.trim()) {
                errors.push(Self::error(
                    Rule::MissingSemicolon,
                    line_no,
                    line.chars().count(),
                    "Missing semicolon",
                    Severity::Warning,
                    "Add semicolon at the end of the statement",
                ));
            }

            let open = line.matches('{').count();
            let close = line.matches('}').count();
            if open != close && !line.trim().is_empty() {
                errors.push(Self::error(
                    Rule::UnmatchedBrackets,
                    line_no,
                    0,
                    "Unmatched brackets",
                    Severity::Error,
                    "Check bracket matching",
                ));
            }
        }

        errors
    }
}
