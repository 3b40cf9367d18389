use super::recommendations::{recommend, RecommendationThresholds};
use super::types::{Agreement, ComparisonReport, MetricComparison, ReconcileConfig};
use crate::ai::AiOutcome;
use crate::analyzers::StaticReport;
use crate::formatting::{MetricFormatter, PrecisionRule};
use crate::metrics::MetricKind;

/// Classify one delta. Exactly zero is a match; anything up to the tolerance
/// is minor.
pub fn classify_delta(delta: f64, config: &ReconcileConfig) -> Agreement {
    let magnitude = delta.abs();
    if magnitude == 0.0 {
        Agreement::Match
    } else if magnitude <= config.minor_tolerance {
        Agreement::MinorDivergence
    } else {
        Agreement::MajorDivergence
    }
}

/// Worst comparable status; `NotComparable` only when nothing was comparable
pub fn overall_agreement(statuses: impl IntoIterator<Item = Agreement>) -> Agreement {
    statuses
        .into_iter()
        .filter(Agreement::is_comparable)
        .max()
        .unwrap_or(Agreement::NotComparable)
}

/// AI values that are negative or non-finite are treated as absent
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

pub struct Reconciler<'a> {
    config: ReconcileConfig,
    thresholds: RecommendationThresholds,
    formatter: MetricFormatter<'a>,
}

impl Default for Reconciler<'static> {
    fn default() -> Self {
        Self::new(
            ReconcileConfig::default(),
            RecommendationThresholds::default(),
            &PrecisionRule::DEFAULT,
        )
    }
}

impl<'a> Reconciler<'a> {
    pub fn new(
        config: ReconcileConfig,
        thresholds: RecommendationThresholds,
        precision: &'a PrecisionRule,
    ) -> Self {
        Self {
            config,
            thresholds,
            formatter: MetricFormatter::new(precision),
        }
    }

    pub fn compare_metric(
        &self,
        kind: MetricKind,
        static_value: u32,
        ai_value: Option<f64>,
    ) -> MetricComparison {
        let static_f = f64::from(static_value);
        let ai_value = usable(ai_value);
        let delta = ai_value.map(|ai| ai - static_f);
        let status = delta.map_or(Agreement::NotComparable, |d| {
            classify_delta(d, &self.config)
        });
        let percent_delta = delta
            .filter(|_| static_value > 0)
            .map(|d| d.abs() / static_f * 100.0);

        MetricComparison {
            metric: kind,
            static_value,
            ai_value,
            delta,
            percent_delta,
            display_static: self.formatter.format(Some(static_f)),
            display_ai: self.formatter.format(ai_value),
            display_delta: self.formatter.format_delta(delta),
            status,
        }
    }

    pub fn reconcile(&self, static_report: &StaticReport, outcome: &AiOutcome) -> ComparisonReport {
        let metrics: Vec<MetricComparison> = MetricKind::ALL
            .iter()
            .map(|&kind| self.compare_metric(kind, static_report.metric(kind), outcome.metric(kind)))
            .collect();

        let agreement = overall_agreement(metrics.iter().map(|m| m.status));
        let not_comparable: Vec<MetricKind> = metrics
            .iter()
            .filter(|m| !m.status.is_comparable())
            .map(|m| m.metric)
            .collect();

        log::debug!(
            "Reconciled metrics: agreement={}, not comparable={:?}",
            agreement,
            not_comparable
        );

        ComparisonReport {
            static_report: static_report.clone(),
            ai: outcome.clone(),
            agreement,
            notes: collect_notes(outcome),
            recommendations: recommend(static_report, outcome, &self.thresholds),
            metrics,
            not_comparable,
        }
    }
}

fn collect_notes(outcome: &AiOutcome) -> Vec<String> {
    match outcome {
        AiOutcome::Parsed(metrics) => metrics
            .notes
            .iter()
            .cloned()
            .chain(metrics.warnings.iter().map(|w| format!("Ignored AI field: {w}")))
            .collect(),
        other => vec![other.describe()],
    }
}

/// Reconcile with default tolerances, thresholds and precision
pub fn reconcile(static_report: &StaticReport, outcome: &AiOutcome) -> ComparisonReport {
    Reconciler::default().reconcile(static_report, outcome)
}
