//! Edge case tests: degenerate inputs must not panic.

use codelens::analyzer::AnalysisEngine;
use codelens::{analyze, Rule};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn analyze_path(path: &Path) -> anyhow::Result<codelens::AnalysisResult> {
    let engine = AnalysisEngine::new();
    engine.analyze_file(path, None).map(|a| a.result)
}

#[test]
fn empty_file_no_panic() {
    let mut file = NamedTempFile::with_suffix(".js").unwrap();
    file.write_all(b"").unwrap();
    file.flush().unwrap();
    let r = analyze_path(file.path()).unwrap();
    assert_eq!(r.metrics.lines_of_code, 0);
    assert_eq!(r.issue_count(), 0);
}

#[test]
fn missing_file_is_an_error() {
    let err = analyze_path(Path::new("does/not/exist.js")).unwrap_err();
    assert!(err.to_string().contains("Failed to read source file"));
}

#[test]
fn prose_has_no_findings() {
    let r = analyze("hello world");
    assert_eq!(r.issue_count(), 0);
    assert!(r.suggestions.is_empty());
}

#[test]
fn binary_looking_text_no_panic() {
    let r = analyze("\u{0}\u{1}\u{2}\u{7f}\u{fffd}\u{fffd}");
    assert_eq!(r.issue_count(), 0);
    assert!(r.score <= 100);
}

#[test]
fn very_long_single_line() {
    let line = "a".repeat(10_000);
    let r = analyze(&line);
    let long: Vec<_> = r
        .warnings
        .iter()
        .filter(|w| w.rule == Rule::LineTooLong)
        .collect();
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].column, 100);
    // One over-80 line costs 2 readability points
    assert_eq!(r.metrics.readability, 100.0 - 2.0 - 10.0 + 10.0);
}

#[test]
fn unicode_columns_count_characters() {
    let r = analyze("const café = \"ü\"; console.log(café)");
    let log = r
        .warnings
        .iter()
        .find(|w| w.rule == Rule::ConsoleLog)
        .unwrap();
    assert_eq!(log.column, 18);
}

#[test]
fn line_of_exactly_100_chars_is_fine() {
    let r = analyze(&"x".repeat(100));
    assert!(r.warnings.iter().all(|w| w.rule != Rule::LineTooLong));
}

#[test]
fn crlf_line_endings_no_panic() {
    let r = analyze("let a = 1;\r\nlet b = 2;\r\n");
    assert_eq!(r.metrics.lines_of_code, 2);
    assert_eq!(r.metrics.variables, 2);
}

#[test]
fn deep_indentation_floors_at_zero() {
    let source = format!("{}x", " ".repeat(500));
    let r = analyze(&source);
    assert_eq!(r.metrics.readability, 0.0);
}

#[test]
fn comment_only_text() {
    let r = analyze("// nothing here\n// or here");
    assert_eq!(r.issue_count(), 0);
    assert_eq!(r.metrics.lines_of_code, 2);
    assert_eq!(r.metrics.functions, 0);
}

#[test]
fn magic_number_reported_once_per_line() {
    let r = analyze("let area = 42 * 17 * 99;");
    let magic = r
        .warnings
        .iter()
        .filter(|w| w.rule == Rule::MagicNumber)
        .count();
    assert_eq!(magic, 1);
}

#[test]
fn single_digit_is_not_magic() {
    let r = analyze("let n = 7;");
    assert!(r.warnings.iter().all(|w| w.rule != Rule::MagicNumber));
}

#[test]
fn magic_number_after_non_ascii_letter() {
    let r = analyze("é42;");
    let magic: Vec<_> = r
        .warnings
        .iter()
        .filter(|w| w.rule == Rule::MagicNumber)
        .collect();
    assert_eq!(magic.len(), 1);
    assert_eq!(magic[0].column, 1);
}

#[test]
fn no_identifiers_keeps_full_naming_credit() {
    // Comment penalty and full naming credit cancel out
    assert_eq!(analyze("123;").metrics.readability, 100.0);
}
