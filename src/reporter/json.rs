//! JSON reporter for machine-readable output

use crate::analyzer::{AggregateStats, FileAnalysis};
use crate::debugging::DebuggingGuidance;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single file analysis as JSON
    pub fn report(&self, analysis: &FileAnalysis) -> String {
        self.render(analysis)
    }

    /// Report multiple results with summary
    pub fn report_with_summary(&self, results: &[FileAnalysis], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results,
            summary: stats,
        };
        self.render(&output)
    }

    pub fn report_guidance(&self, guidance: &DebuggingGuidance) -> String {
        self.render(guidance)
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [FileAnalysis],
    summary: &'a AggregateStats,
}
