use crate::ai::AiOutcome;
use crate::analyzers::StaticReport;
use crate::metrics::MetricKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How closely an AI-reported metric matches the static one.
///
/// Ordered from best to worst; `NotComparable` sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Agreement {
    Match,
    MinorDivergence,
    MajorDivergence,
    NotComparable,
}

impl Agreement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::MinorDivergence => "minorDivergence",
            Self::MajorDivergence => "majorDivergence",
            Self::NotComparable => "notComparable",
        }
    }

    pub fn is_comparable(&self) -> bool {
        !matches!(self, Self::NotComparable)
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tolerances used when classifying deltas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Largest `|delta|` still reported as a minor divergence
    #[serde(default = "default_minor_tolerance")]
    pub minor_tolerance: f64,
}

pub fn default_minor_tolerance() -> f64 {
    1.0
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            minor_tolerance: default_minor_tolerance(),
        }
    }
}

/// Static and AI values for one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub metric: MetricKind,
    pub static_value: u32,
    pub ai_value: Option<f64>,
    /// `ai_value - static_value`
    pub delta: Option<f64>,
    /// `|delta|` as a percentage of the static value, when that is non-zero
    pub percent_delta: Option<f64>,
    pub display_static: String,
    pub display_ai: String,
    pub display_delta: String,
    pub status: Agreement,
}

/// Result of reconciling one static report with one AI outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    #[serde(rename = "static")]
    pub static_report: StaticReport,
    pub ai: AiOutcome,
    pub metrics: Vec<MetricComparison>,
    pub agreement: Agreement,
    /// Metrics without a usable AI value
    pub not_comparable: Vec<MetricKind>,
    pub notes: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ComparisonReport {
    pub fn metric(&self, kind: MetricKind) -> Option<&MetricComparison> {
        self.metrics.iter().find(|m| m.metric == kind)
    }

    pub fn status(&self, kind: MetricKind) -> Option<Agreement> {
        self.metric(kind).map(|m| m.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agreement_ordering() {
        assert!(Agreement::Match < Agreement::MinorDivergence);
        assert!(Agreement::MinorDivergence < Agreement::MajorDivergence);
        assert!(Agreement::MajorDivergence < Agreement::NotComparable);
    }

    #[test]
    fn test_agreement_wire_names() {
        for agreement in [
            Agreement::Match,
            Agreement::MinorDivergence,
            Agreement::MajorDivergence,
            Agreement::NotComparable,
        ] {
            let json = serde_json::to_string(&agreement).unwrap();
            assert_eq!(json, format!("\"{}\"", agreement.as_str()));
            let parsed: Agreement = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, agreement);
        }
    }
}
