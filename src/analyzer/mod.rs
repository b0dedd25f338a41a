//! Analyzer module - code quality analysis engine

pub mod engine;
pub mod metrics;
pub mod patterns;
pub mod rules;
pub mod scoring;

pub use engine::{AggregateStats, AnalysisEngine, FileAnalysis};
pub use metrics::MetricCalculator;
pub use scoring::ScoreCalculator;
