//! Debugging assistant: canned debugging tips and candidate test inputs.
//!
//! Independent of the analyzer; works only from the raw text and an optional
//! error message.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const UNDEFINED_TIPS: [&str; 3] = [
    "Check if variables are properly declared and initialized",
    "Use console.log to trace variable values",
    "Verify object properties exist before accessing them",
];

const SYNTAX_TIPS: [&str; 3] = [
    "Check for missing brackets, parentheses, or semicolons",
    "Verify proper function declaration syntax",
    "Look for unmatched quotes or brackets",
];

const FUNCTION_TIPS: [&str; 3] = [
    "Ensure the function is defined before calling it",
    "Check function parameter count and types",
    "Verify function scope and accessibility",
];

const GENERAL_TIPS: [&str; 5] = [
    "Add console.log statements to trace execution flow",
    "Use browser developer tools to set breakpoints",
    "Check the browser console for additional error details",
    "Verify input data types and formats",
    "Test with simpler input values first",
];

/// A candidate input to try against the code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseSuggestion {
    /// JSON input; `None` stands for "undefined" and is omitted when serialized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    pub description: String,
}

impl TestCaseSuggestion {
    fn new(input: Option<Value>, description: &str) -> Self {
        Self {
            input,
            description: description.to_string(),
        }
    }
}

/// Tips and test cases for the "debug help" view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebuggingGuidance {
    /// Error-specific tips first, then general tips
    pub tips: Vec<String>,
    pub test_cases: Vec<TestCaseSuggestion>,
}

/// Assistant over one block of source text
pub struct DebuggingAssistant<'a> {
    source: &'a str,
}

impl<'a> DebuggingAssistant<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tips keyed on the error message, followed by the general tips.
    /// Matching is case-sensitive.
    pub fn tips(&self, error_message: Option<&str>) -> Vec<String> {
        let mut tips = Vec::new();

        if let Some(error) = error_message {
            if error.contains("undefined") {
                tips.extend(UNDEFINED_TIPS.iter().map(|t| t.to_string()));
            }
            if error.contains("syntax") {
                tips.extend(SYNTAX_TIPS.iter().map(|t| t.to_string()));
            }
            if error.contains("function") {
                tips.extend(FUNCTION_TIPS.iter().map(|t| t.to_string()));
            }
        }

        tips.extend(GENERAL_TIPS.iter().map(|t| t.to_string()));
        tips
    }

    /// Candidate inputs based on what the source appears to handle
    pub fn test_cases(&self) -> Vec<TestCaseSuggestion> {
        let mut cases = Vec::new();

        if self.source.contains("function") {
            cases.extend([
                TestCaseSuggestion::new(Some(Value::Null), "Test with null input"),
                TestCaseSuggestion::new(None, "Test with undefined input"),
                TestCaseSuggestion::new(Some(json!("")), "Test with empty string"),
                TestCaseSuggestion::new(Some(json!(0)), "Test with zero value"),
                TestCaseSuggestion::new(Some(json!([])), "Test with empty array"),
            ]);
        }

        if self.source.contains("array") || self.source.contains('[') {
            cases.extend([
                TestCaseSuggestion::new(Some(json!([1, 2, 3])), "Test with normal array"),
                TestCaseSuggestion::new(Some(json!([1])), "Test with single element"),
                TestCaseSuggestion::new(Some(json!([])), "Test with empty array"),
            ]);
        }

        if self.source.contains("string") || self.source.contains('"') {
            cases.extend([
                TestCaseSuggestion::new(Some(json!("hello")), "Test with normal string"),
                TestCaseSuggestion::new(Some(json!("")), "Test with empty string"),
                TestCaseSuggestion::new(Some(json!("a")), "Test with single character"),
            ]);
        }

        cases
    }

    pub fn guidance(&self, error_message: Option<&str>) -> DebuggingGuidance {
        DebuggingGuidance {
            tips: self.tips(error_message),
            test_cases: self.test_cases(),
        }
    }
}

/// Debugging tips for `source`, optionally keyed on an error message
pub fn debugging_tips(source: &str, error_message: Option<&str>) -> Vec<String> {
    DebuggingAssistant::new(source).tips(error_message)
}

/// Candidate test inputs for `source`
pub fn suggested_test_cases(source: &str) -> Vec<TestCaseSuggestion> {
    DebuggingAssistant::new(source).test_cases()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_tips_only_without_error() {
        let tips = debugging_tips("let x = 1;", None);
        assert_eq!(tips.len(), 5);
        assert_eq!(tips[0], GENERAL_TIPS[0]);
        assert_eq!(tips[4], "Test with simpler input values first");
    }

    #[test]
    fn undefined_tips_precede_general_tips() {
        let tips = debugging_tips("x.y", Some("TypeError: x is undefined"));
        assert_eq!(tips.len(), 8);
        assert_eq!(&tips[..3], &UNDEFINED_TIPS.map(String::from)[..]);
        assert_eq!(&tips[3..], &GENERAL_TIPS.map(String::from)[..]);
    }

    #[test]
    fn multiple_error_keywords_stack_in_fixed_order() {
        let tips = debugging_tips("", Some("syntax error: function is undefined"));
        assert_eq!(tips.len(), 14);
        assert_eq!(tips[0], UNDEFINED_TIPS[0]);
        assert_eq!(tips[3], SYNTAX_TIPS[0]);
        assert_eq!(tips[6], FUNCTION_TIPS[0]);
        assert_eq!(tips[9], GENERAL_TIPS[0]);
    }

    #[test]
    fn error_keyword_matching_is_case_sensitive() {
        assert_eq!(debugging_tips("", Some("SyntaxError: bad")).len(), 5);
    }

    #[test]
    fn function_source_gets_edge_inputs() {
        let cases = suggested_test_cases("function f(x) { return x; }");
        assert_eq!(cases.len(), 5);
        assert_eq!(cases[0].input, Some(Value::Null));
        assert_eq!(cases[1].input, None);
        assert_eq!(cases[4].input, Some(json!([])));
    }

    #[test]
    fn checks_are_additive() {
        let cases = suggested_test_cases("function f(arr) { return arr[0] + \"!\"; }");
        assert_eq!(cases.len(), 11);
        assert_eq!(cases[5].description, "Test with normal array");
        assert_eq!(cases[8].description, "Test with normal string");
    }

    #[test]
    fn plain_text_gets_no_cases() {
        assert!(suggested_test_cases("hello world").is_empty());
    }

    #[test]
    fn undefined_input_is_omitted_in_json() {
        let case = TestCaseSuggestion::new(None, "Test with undefined input");
        let json = serde_json::to_string(&case).unwrap();
        assert_eq!(json, r#"{"description":"Test with undefined input"}"#);
    }

    #[test]
    fn guidance_combines_both() {
        let g = DebuggingAssistant::new("const s = \"x\";").guidance(None);
        assert_eq!(g.tips.len(), 5);
        assert_eq!(g.test_cases.len(), 3);
    }
}
