// Export modules for library usage
pub mod ai;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod complexity;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod metrics;
pub mod rules;

// Re-export commonly used types
pub use crate::ai::{
    build_prompt, fetch_outcome, interpret_response, AiMetrics, AiOutcome, ResponseSource,
    SourceFailure,
};
pub use crate::analyzers::{analyze_file, analyze_paths, analyze_source, FileReport, StaticReport};
pub use crate::comparison::{
    reconcile, Agreement, ComparisonReport, MetricComparison, Reconciler, ReconcileConfig,
    RecommendationThresholds,
};
pub use crate::complexity::{
    cfg_metrics, count_decision_points, max_nesting_depth, CfgMetrics, ComplexityScores,
};
pub use crate::config::CaiConfig;
pub use crate::errors::{Error, Result};
pub use crate::formatting::{format_metric, FormattingConfig, MetricFormatter, PrecisionRule};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::metrics::{count_loc, LocCount, MetricKind};
pub use crate::rules::{check_source, Finding, Severity};
