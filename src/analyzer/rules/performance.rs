//! Performance suggestions from whole-text checks.
//! The three checks are independent and may all fire at once.

use super::Scanner;
use crate::{CodeSuggestion, Rule, SuggestionCategory};

/// Scanner producing optimization and improvement suggestions
pub struct PerformanceScanner;

impl PerformanceScanner {
    pub fn new() -> Self {
        Self
    }

    fn suggestion(
        rule: Rule,
        category: SuggestionCategory,
        message: &str,
        before: &str,
        after: &str,
        explanation: &str,
    ) -> CodeSuggestion {
        CodeSuggestion {
            id: rule.finding_id(None),
            rule,
            category,
            message: message.to_string(),
            line: None,
            before: before.to_string(),
            after: after.to_string(),
            explanation: explanation.to_string(),
        }
    }
}

impl Default for PerformanceScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for PerformanceScanner {
    type Finding = CodeSuggestion;

    fn name(&self) -> &'static str {
        "performance"
    }

    fn scan(&self, source: &str, _lines: &[&str]) -> Vec<CodeSuggestion> {
        let mut suggestions = Vec::new();
        let has_loop = source.contains("for");

        if has_loop && source.contains(".length") {
            suggestions.push(Self::suggestion(
                Rule::CacheArrayLength,
                SuggestionCategory::Optimization,
                "Cache array length in loops",
                "for (let i = 0; i < array.length; i++)",
                "for (let i = 0, len = array.length; i < len; i++)",
                "Caching array length prevents repeated property access",
            ));
        }

        if has_loop && source.contains("+=") && source.contains('"') {
            suggestions.push(Self::suggestion(
                Rule::StringConcatInLoop,
                SuggestionCategory::Optimization,
                "Use array join for string concatenation in loops",
                "str += \"text\"",
                "array.push(\"text\"); // then array.join(\"\")",
                "Array join is more efficient than repeated string concatenation",
            ));
        }

        if has_loop && (source.contains("push") || source.contains("if")) {
            suggestions.push(Self::suggestion(
                Rule::PreferArrayMethods,
                SuggestionCategory::Improvement,
                "Consider using array methods like map, filter, reduce",
                "for loop with conditional logic",
                "array.filter().map()",
                "Array methods are more readable and often more performant",
            ));
        }

        suggestions
    }
}
