//! End-to-end reconciliation of static metrics with AI outcomes

use cai_check::ai::{interpret_response, AiOutcome};
use cai_check::analyzers::analyze_source;
use cai_check::comparison::{
    reconcile, recommendations, Agreement, RecommendationThresholds, ReconcileConfig, Reconciler,
};
use cai_check::formatting::PrecisionRule;
use cai_check::metrics::MetricKind;
use indoc::indoc;
use pretty_assertions::assert_eq;

const SINGLE_IF: &str = "int main(){ if(x) return 1; else return 2; }";

#[test]
fn test_single_if_scenario() {
    let report = analyze_source(SINGLE_IF);
    assert_eq!(report.decision_points, 1);
    assert_eq!((report.c1, report.c2, report.c3), (2, 2, 2));
    assert_eq!(report.loc, 1);
}

#[test]
fn test_full_agreement() {
    let report = analyze_source(SINGLE_IF);
    let outcome = interpret_response(r#"{"loc": 1, "c1": 2, "c2": 2, "c3": 2}"#);
    let comparison = reconcile(&report, &outcome);

    assert_eq!(comparison.agreement, Agreement::Match);
    assert!(comparison.not_comparable.is_empty());
    for m in &comparison.metrics {
        assert_eq!(m.delta, Some(0.0));
        assert_eq!(m.display_delta, "0");
    }
}

#[test]
fn test_fractional_ai_values_show_small_gaps() {
    let report = analyze_source(SINGLE_IF);
    let outcome = interpret_response(r#"{"loc": 1, "complexity1": 2.7, "complexity2": 0.3}"#);
    let comparison = reconcile(&report, &outcome);

    let c1 = comparison.metric(MetricKind::C1).unwrap();
    assert_eq!(c1.display_ai, "2.7");
    assert_eq!(c1.display_delta, "+0.7");
    assert_eq!(c1.status, Agreement::MinorDivergence);

    let c2 = comparison.metric(MetricKind::C2).unwrap();
    assert_eq!(c2.display_ai, "0.3");
    assert_eq!(c2.display_delta, "-1.7");
    assert_eq!(c2.status, Agreement::MajorDivergence);

    assert_eq!(comparison.status(MetricKind::C3), Some(Agreement::NotComparable));
    assert_eq!(comparison.agreement, Agreement::MajorDivergence);
    assert_eq!(comparison.not_comparable, vec![MetricKind::C3]);
}

#[test]
fn test_parse_error_keeps_static_side() {
    let report = analyze_source(SINGLE_IF);
    let outcome = interpret_response("{oops}");
    let comparison = reconcile(&report, &outcome);

    assert_eq!(comparison.agreement, Agreement::NotComparable);
    assert_eq!(comparison.static_report, report);
    assert!(comparison.notes[0].starts_with("AI response could not be parsed"));
    for m in &comparison.metrics {
        assert_eq!(m.display_ai, "NA");
        assert_ne!(m.display_static, "NA");
    }
}

#[test]
fn test_tolerance_and_thresholds_are_configurable() {
    let source = indoc! {r#"
        int deep(int a, int b, int c) {
            if (a) {
                if (b) {
                    if (c) {
                        while (a--) {
                            b++;
                        }
                    }
                }
            }
            return b;
        }
    "#};
    let report = analyze_source(source);
    assert_eq!(report.nesting_depth, 5);

    let precision = PrecisionRule::DEFAULT;
    let reconciler = Reconciler::new(
        ReconcileConfig {
            minor_tolerance: 2.0,
        },
        RecommendationThresholds {
            complexity: 3,
            nesting: 4,
            loc_ratio: 1.5,
        },
        &precision,
    );
    let outcome = AiOutcome::Parsed(cai_check::ai::AiMetrics {
        c1: Some(f64::from(report.c1) + 2.0),
        ..Default::default()
    });
    let comparison = reconciler.reconcile(&report, &outcome);

    assert_eq!(comparison.status(MetricKind::C1), Some(Agreement::MinorDivergence));
    assert_eq!(
        comparison.recommendations,
        vec![
            recommendations::REFACTOR_COMPLEXITY.to_string(),
            recommendations::REDUCE_NESTING.to_string(),
        ]
    );
}

#[test]
fn test_large_ai_loc_triggers_review() {
    let report = analyze_source(SINGLE_IF);
    let outcome = interpret_response(r#"{"loc": 5}"#);
    let comparison = reconcile(&report, &outcome);
    assert_eq!(
        comparison.recommendations,
        vec![recommendations::REVIEW_LOC_GAP.to_string()]
    );
}

#[test]
fn test_report_json_field_names() {
    let report = analyze_source(SINGLE_IF);
    let comparison = reconcile(&report, &interpret_response(r#"{"loc": 1}"#));
    let json = serde_json::to_value(&comparison).unwrap();

    assert_eq!(json["static"]["decisionPoints"], 1);
    assert_eq!(json["ai"]["kind"], "parsed");
    assert_eq!(json["metrics"][0]["metric"], "loc");
    assert_eq!(json["metrics"][0]["status"], "match");
    assert_eq!(json["metrics"][1]["status"], "notComparable");
    assert_eq!(json["agreement"], "match");
    assert_eq!(json["notComparable"], serde_json::json!(["c1", "c2", "c3"]));
}
