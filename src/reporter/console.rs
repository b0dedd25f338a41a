//! Console reporter with colored output

use crate::analyzer::{AggregateStats, FileAnalysis, ScoreCalculator};
use crate::debugging::DebuggingGuidance;
use crate::{AnalysisResult, CodeError, CodeMetrics, Rating, Severity};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        colored::control::set_override(false);
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single file analysis
    pub fn report(&self, analysis: &FileAnalysis) {
        let result = &analysis.result;
        println!();
        println!(
            "{}",
            format!("Code Quality Analysis: {}", analysis.file_path.display()).bold()
        );
        println!(
            "   Lines: {} | Functions: {} | Variables: {}",
            result.metrics.lines_of_code, result.metrics.functions, result.metrics.variables
        );
        println!();

        self.print_score(result);
        self.print_metrics(&result.metrics);

        if !result.errors.is_empty() || !result.warnings.is_empty() {
            self.print_issues(result);
        }
        if !result.suggestions.is_empty() {
            self.print_suggestions(result);
        }

        self.print_recommendations(result);
        println!();
    }

    /// Report multiple results with summary
    pub fn report_many(&self, results: &[FileAnalysis], stats: &AggregateStats) {
        for analysis in results {
            self.report(analysis);
            println!("{}", "-".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, analysis: &FileAnalysis) {
        let rating = self.colorize_rating(analysis.result.rating());
        println!(
            "{}: {} ({})",
            analysis.file_path.display(),
            analysis.result.score,
            rating
        );
    }

    /// Report debugging tips and suggested test cases
    pub fn report_guidance(&self, guidance: &DebuggingGuidance) {
        println!();
        println!("   {}", "Debugging Tips:".bold());
        for (i, tip) in guidance.tips.iter().enumerate() {
            println!("   {:>2}. {}", i + 1, tip);
        }

        if !guidance.test_cases.is_empty() {
            println!();
            println!("   {}", "Suggested Test Cases:".bold());
            for case in &guidance.test_cases {
                let input = case
                    .input
                    .as_ref()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "undefined".to_string());
                println!("   {} {} {}", "→".cyan(), input.bold(), case.description.dimmed());
            }
        }
        println!();
    }

    fn print_score(&self, result: &AnalysisResult) {
        let rating = result.rating();
        let score_bar = self.create_score_bar(result.score);

        println!("   Score: {} {}", score_bar, self.colorize_rating(rating).bold());
        println!(
            "   {}",
            ScoreCalculator::rating_description(rating).dimmed()
        );
        println!();
    }

    fn print_metrics(&self, metrics: &CodeMetrics) {
        println!("   {}", "Metrics:".bold());
        let rows = [
            ("Readability", metrics.readability.round() as u8),
            ("Maintainability", metrics.maintainability),
            ("Performance", metrics.performance),
        ];
        for (name, value) in rows {
            let bar = self.create_mini_bar(value);
            let value_str = format!("{:>3}/100", value);
            let colored_value = if value >= 80 {
                value_str.green()
            } else if value >= 60 {
                value_str.yellow()
            } else {
                value_str.red()
            };
            println!("   {} {} {}", bar, colored_value, name);
        }
        println!("   Complexity: {}", metrics.complexity);
        println!();
    }

    fn print_issues(&self, result: &AnalysisResult) {
        println!("   {}", "Issues Found:".bold());

        for error in errors_with(result, Severity::Error) {
            self.print_error(error);
        }
        for error in errors_with(result, Severity::Warning) {
            self.print_error(error);
        }

        for warning in &result.warnings {
            let location = format!("L{}:{}", warning.line, warning.column);
            println!(
                "   {} {} [{}] {}",
                "⚠".yellow(),
                location.dimmed(),
                warning.rule.to_string().dimmed(),
                warning.message
            );
            if self.verbose {
                println!("       {} {}", "→".dimmed(), warning.suggestion.italic());
            }
        }

        let infos = errors_with(result, Severity::Info);
        if self.verbose || result.issue_count() <= 5 {
            for error in infos {
                self.print_error(error);
            }
        } else if !infos.is_empty() {
            println!(
                "   {} {} additional notes (use --verbose to show)",
                "ℹ".blue(),
                infos.len()
            );
        }

        println!();
    }

    fn print_error(&self, error: &CodeError) {
        let icon = match error.severity {
            Severity::Error => "✗".red(),
            Severity::Warning => "⚠".yellow(),
            Severity::Info => "ℹ".blue(),
        };

        let location = format!("L{}:{}", error.line, error.column);
        println!(
            "   {} {} [{}] {}",
            icon,
            location.dimmed(),
            error.rule.to_string().dimmed(),
            error.message
        );

        if let Some(ref fix) = error.fix {
            println!("       {} {}", "→".dimmed(), fix.italic());
        }
    }

    fn print_suggestions(&self, result: &AnalysisResult) {
        println!("   {}", "Suggestions:".bold());
        for suggestion in &result.suggestions {
            println!(
                "   {} [{}] {}",
                "ℹ".blue(),
                suggestion.rule.to_string().dimmed(),
                suggestion.message
            );
            if self.verbose {
                println!("       before: {}", suggestion.before.dimmed());
                println!("       after:  {}", suggestion.after.green());
                println!("       {}", suggestion.explanation.italic());
            }
        }
        println!();
    }

    fn print_recommendations(&self, result: &AnalysisResult) {
        if result.score >= 90 {
            return;
        }
        println!("   {}", "Recommendations:".bold());
        for rec in ScoreCalculator::recommendations(&result.metrics)
            .iter()
            .take(3)
        {
            println!("   {} {}", "→".cyan(), rec);
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "=".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "=".repeat(60));
        println!(
            "   Files analyzed: {}",
            stats.files_analyzed.to_string().bold()
        );
        println!(
            "   Average score:  {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_rating(Rating::from_score(stats.average_score))
        );
        println!("   Lines of code:  {}", stats.total_lines);
        println!(
            "   Findings:       {} errors, {} warnings, {} suggestions",
            stats.total_errors, stats.total_warnings, stats.total_suggestions
        );
        println!();
    }

    fn colorize_rating(&self, rating: Rating) -> colored::ColoredString {
        let s = rating.to_string();
        match rating {
            Rating::Good => s.green(),
            Rating::Fair => s.yellow(),
            Rating::Poor => s.red(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            match Rating::from_score(score) {
                Rating::Good => bar.green().to_string(),
                Rating::Fair => bar.yellow().to_string(),
                Rating::Poor => bar.red().to_string(),
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, value: u8) -> String {
        let filled = (value.min(100) as usize * 10) / 100;
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

fn errors_with(result: &AnalysisResult, severity: Severity) -> Vec<&CodeError> {
    result
        .errors
        .iter()
        .filter(|e| e.severity == severity)
        .collect()
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
