//! Diagnostic scanners
//!
//! Each scanner walks the text independently and emits one kind of finding.
//! Scanners never look at each other's output.

pub mod performance;
pub mod style;
pub mod syntax;

pub use performance::PerformanceScanner;
pub use style::StyleScanner;
pub use syntax::SyntaxScanner;

/// Trait for diagnostic scanners
pub trait Scanner {
    /// Finding type this scanner produces
    type Finding;

    /// Name of the scanner
    fn name(&self) -> &'static str;

    /// Scan the full text (also given pre-split on `\n`) and return findings
    /// in line order, then check order within a line.
    fn scan(&self, source: &str, lines: &[&str]) -> Vec<Self::Finding>;
}

/// Convert a byte offset within `line` into a character column (0-indexed)
pub(crate) fn char_column(line: &str, byte_idx: usize) -> usize {
    line.get(..byte_idx)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_column_counts_characters_not_bytes() {
        let line = "é = var";
        let idx = line.find("var").unwrap();
        assert_eq!(idx, 5);
        assert_eq!(char_column(line, idx), 4);
    }
}
