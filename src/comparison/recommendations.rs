use crate::ai::AiOutcome;
use crate::analyzers::StaticReport;
use crate::complexity::ComplexityCalculator;
use crate::metrics::MetricKind;
use serde::{Deserialize, Serialize};

pub const REFACTOR_COMPLEXITY: &str =
    "Refactor to reduce cyclomatic complexity (extract functions, simplify branches).";
pub const REDUCE_NESTING: &str = "Reduce nesting depth with early returns or guard clauses.";
pub const REVIEW_LOC_GAP: &str =
    "AI reports noticeably more testable lines; review for dead code or hidden branches.";
pub const MANAGEABLE: &str =
    "Code appears manageable; add unit tests for decision-heavy functions.";

/// Limits above which advice is produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    #[serde(default = "default_complexity")]
    pub complexity: u32,
    #[serde(default = "default_nesting")]
    pub nesting: u32,
    /// AI `loc` above `static loc * loc_ratio` triggers a review
    #[serde(default = "default_loc_ratio")]
    pub loc_ratio: f64,
}

fn default_complexity() -> u32 {
    10
}

fn default_nesting() -> u32 {
    4
}

fn default_loc_ratio() -> f64 {
    1.5
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            complexity: default_complexity(),
            nesting: default_nesting(),
            loc_ratio: default_loc_ratio(),
        }
    }
}

pub fn recommend(
    static_report: &StaticReport,
    outcome: &AiOutcome,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let mut recs = Vec::new();
    let calc = ComplexityCalculator::new(thresholds.complexity, thresholds.nesting);

    if calc.is_complex(static_report.c1) {
        recs.push(REFACTOR_COMPLEXITY.to_string());
    }
    if calc.is_deeply_nested(static_report.nesting_depth) {
        recs.push(REDUCE_NESTING.to_string());
    }
    if let Some(ai_loc) = outcome.metric(MetricKind::Loc).filter(|v| v.is_finite()) {
        if ai_loc > f64::from(static_report.loc) * thresholds.loc_ratio {
            recs.push(REVIEW_LOC_GAP.to_string());
        }
    }

    if recs.is_empty() {
        recs.push(MANAGEABLE.to_string());
    }
    recs
}
