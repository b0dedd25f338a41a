//! Analysis engine - orchestrates scanners, metrics and scoring

use crate::config::{Config, EffectiveConfig, RuleSeverity};
use crate::{AnalysisResult, CodeError, CodeMetrics, CodeSuggestion, CodeWarning, Rule};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::metrics::MetricCalculator;
use super::rules::{PerformanceScanner, Scanner, StyleScanner, SyntaxScanner};
use super::ScoreCalculator;

/// Main analysis engine that orchestrates all scanners
pub struct AnalysisEngine {
    /// Run the scanners and metric calculator on the rayon pool
    parallel_scanners: bool,
}

/// Raw scanner output before configuration is applied
struct ScanOutput {
    errors: Vec<CodeError>,
    warnings: Vec<CodeWarning>,
    suggestions: Vec<CodeSuggestion>,
    metrics: CodeMetrics,
}

impl AnalysisEngine {
    /// Create a new analysis engine
    pub fn new() -> Self {
        Self {
            parallel_scanners: false,
        }
    }

    /// Evaluate the independent scanners concurrently. Results are identical either way.
    pub fn with_parallel_scanners(mut self) -> Self {
        self.parallel_scanners = true;
        self
    }

    /// Analyze source text with the default configuration
    pub fn analyze_source(&self, source: &str) -> AnalysisResult {
        self.analyze_with_config(source, None)
    }

    /// Analyze source text, dropping or re-labelling findings per `config`
    pub fn analyze_with_config(
        &self,
        source: &str,
        config: Option<&EffectiveConfig>,
    ) -> AnalysisResult {
        let ScanOutput {
            errors,
            warnings,
            suggestions,
            metrics,
        } = self.scan(source);

        let (errors, warnings, suggestions) = match config {
            Some(cfg) => Self::apply_config(errors, warnings, suggestions, cfg),
            None => (errors, warnings, suggestions),
        };

        let score = ScoreCalculator::calculate(&errors, &warnings, &suggestions, &metrics);

        AnalysisResult {
            errors,
            warnings,
            suggestions,
            metrics,
            score,
        }
    }

    fn scan(&self, source: &str) -> ScanOutput {
        let lines: Vec<&str> = source.split('\n').collect();
        let syntax = SyntaxScanner::new();
        let style = StyleScanner::new();
        let performance = PerformanceScanner::new();

        let (errors, warnings, suggestions, metrics) = if self.parallel_scanners {
            let ((errors, warnings), (suggestions, metrics)) = rayon::join(
                || {
                    rayon::join(
                        || syntax.scan(source, &lines),
                        || style.scan(source, &lines),
                    )
                },
                || {
                    rayon::join(
                        || performance.scan(source, &lines),
                        || MetricCalculator::calculate(source),
                    )
                },
            );
            (errors, warnings, suggestions, metrics)
        } else {
            (
                syntax.scan(source, &lines),
                style.scan(source, &lines),
                performance.scan(source, &lines),
                MetricCalculator::calculate(source),
            )
        };

        log::debug!(
            "{}: {} / {}: {} / {}: {}",
            syntax.name(),
            errors.len(),
            style.name(),
            warnings.len(),
            performance.name(),
            suggestions.len()
        );

        ScanOutput {
            errors,
            warnings,
            suggestions,
            metrics,
        }
    }

    /// Apply config to filter findings and adjust syntax-error severity
    fn apply_config(
        errors: Vec<CodeError>,
        warnings: Vec<CodeWarning>,
        suggestions: Vec<CodeSuggestion>,
        config: &EffectiveConfig,
    ) -> (Vec<CodeError>, Vec<CodeWarning>, Vec<CodeSuggestion>) {
        let setting = |rule: Rule| config.rule_severity(&rule.to_string());
        let enabled = |rule: Rule| setting(rule) != Some(RuleSeverity::Off);

        let errors = errors
            .into_iter()
            .filter(|e| enabled(e.rule))
            .map(|mut e| {
                if let Some(sev) = setting(e.rule).and_then(RuleSeverity::to_severity) {
                    e.severity = sev;
                }
                e
            })
            .collect();
        let warnings = warnings.into_iter().filter(|w| enabled(w.rule)).collect();
        let suggestions = suggestions
            .into_iter()
            .filter(|s| enabled(s.rule))
            .collect();

        (errors, warnings, suggestions)
    }

    /// Read and analyze a file, applying the config effective for its path
    pub fn analyze_file(&self, path: &Path, config: Option<&Config>) -> Result<FileAnalysis> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        let effective = config.map(|c| c.effective_for_file(path));
        let result = self.analyze_with_config(&source, effective.as_ref());
        log::info!("analyzed {} (score {})", path.display(), result.score);

        Ok(FileAnalysis {
            file_path: path.to_path_buf(),
            threshold: effective.and_then(|e| e.threshold),
            result,
        })
    }

    /// Analyze multiple files sequentially
    pub fn analyze_many(
        &self,
        paths: &[PathBuf],
        config: Option<&Config>,
    ) -> Vec<Result<FileAnalysis>> {
        paths.iter().map(|p| self.analyze_file(p, config)).collect()
    }

    /// Analyze multiple files in parallel using rayon
    pub fn analyze_parallel(
        &self,
        paths: &[PathBuf],
        config: Option<&Config>,
    ) -> Vec<Result<FileAnalysis>> {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|p| self.analyze_file(p, config))
            .collect()
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(results: &[FileAnalysis]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = results.iter().map(|r| r.result.score as u32).sum();
        let average_score = (total_score / results.len() as u32) as u8;

        AggregateStats {
            files_analyzed: results.len(),
            average_score,
            total_errors: results.iter().map(|r| r.result.errors.len()).sum(),
            total_warnings: results.iter().map(|r| r.result.warnings.len()).sum(),
            total_suggestions: results.iter().map(|r| r.result.suggestions.len()).sum(),
            total_lines: results.iter().map(|r| r.result.metrics.lines_of_code).sum(),
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of analyzing one file on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysis {
    pub file_path: PathBuf,
    /// Threshold effective for this file, if configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl FileAnalysis {
    pub fn below_threshold(&self) -> bool {
        self.threshold.is_some_and(|t| self.result.score < t)
    }
}

/// Aggregate statistics from multiple file analyses
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub files_analyzed: usize,
    pub average_score: u8,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub total_suggestions: usize,
    pub total_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn make_source_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".js").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn effective(rules: &[(&str, RuleSeverity)]) -> EffectiveConfig {
        EffectiveConfig {
            threshold: None,
            rules: rules
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>(),
        }
    }

    const SAMPLE: &str = "var total = 0\nfor (let i = 0; i < items.length; i++) {\n  if (items[i] > 10) total += items[i];\n}\nconsole.log(total);";

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = AnalysisEngine::new().analyze_source(SAMPLE);
        let parallel = AnalysisEngine::new()
            .with_parallel_scanners()
            .analyze_source(SAMPLE);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_rule_off_drops_findings_and_raises_score() {
        let engine = AnalysisEngine::new();
        let base = engine.analyze_source(SAMPLE);
        assert!(base.warnings.iter().any(|w| w.rule == Rule::ConsoleLog));

        let cfg = effective(&[("console-log", RuleSeverity::Off)]);
        let filtered = engine.analyze_with_config(SAMPLE, Some(&cfg));
        assert!(!filtered.warnings.iter().any(|w| w.rule == Rule::ConsoleLog));
        assert!(filtered.score >= base.score);
    }

    #[test]
    fn test_severity_override_relabels_syntax_errors() {
        let engine = AnalysisEngine::new();
        let cfg = effective(&[("unmatched-brackets", RuleSeverity::Info)]);
        let result = engine.analyze_with_config(SAMPLE, Some(&cfg));
        let brackets: Vec<_> = result
            .errors
            .iter()
            .filter(|e| e.rule == Rule::UnmatchedBrackets)
            .collect();
        assert!(!brackets.is_empty());
        assert!(brackets.iter().all(|e| e.severity == Severity::Info));
    }

    #[test]
    fn test_suggestions_can_be_disabled() {
        let engine = AnalysisEngine::new();
        let cfg = effective(&[("cache-array-length", RuleSeverity::Off)]);
        let result = engine.analyze_with_config(SAMPLE, Some(&cfg));
        assert!(!result
            .suggestions
            .iter()
            .any(|s| s.rule == Rule::CacheArrayLength));
    }

    #[test]
    fn test_analyze_file_applies_threshold() {
        let file = make_source_file(SAMPLE);
        let config = Config {
            threshold: Some(101),
            ..Config::default()
        };
        let analysis = AnalysisEngine::new()
            .analyze_file(file.path(), Some(&config))
            .unwrap();
        assert_eq!(analysis.threshold, Some(101));
        assert!(analysis.below_threshold());
    }

    #[test]
    fn test_analyze_missing_file_errors() {
        let err = AnalysisEngine::new()
            .analyze_file(Path::new("/definitely/not/here.js"), None)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read source file"));
    }

    #[test]
    fn test_aggregate_stats() {
        let a = make_source_file("const a = 1;");
        let b = make_source_file(SAMPLE);
        let engine = AnalysisEngine::new();
        let results: Vec<FileAnalysis> = engine
            .analyze_parallel(&[a.path().to_path_buf(), b.path().to_path_buf()], None)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        let stats = AnalysisEngine::aggregate_stats(&results);
        assert_eq!(stats.files_analyzed, 2);
        assert_eq!(stats.total_lines, 6);
        let expected = (results[0].result.score as u32 + results[1].result.score as u32) / 2;
        assert_eq!(stats.average_score as u32, expected);
    }

    #[test]
    fn test_aggregate_stats_empty() {
        let stats = AnalysisEngine::aggregate_stats(&[]);
        assert_eq!(stats.files_analyzed, 0);
        assert_eq!(stats.average_score, 0);
    }
}
