//! Reconciliation of static metrics against an AI outcome
//!
//! Each metric gets a delta and an [`Agreement`] status; the report's overall
//! agreement is the worst status among comparable metrics.

pub mod reconciler;
pub mod recommendations;
pub mod types;

pub use crate::metrics::MetricKind;
pub use reconciler::{classify_delta, overall_agreement, reconcile, Reconciler};
pub use recommendations::{recommend, RecommendationThresholds};
pub use types::{Agreement, ComparisonReport, MetricComparison, ReconcileConfig};
