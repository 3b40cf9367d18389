//! AI response interpretation: extraction, validation and provider failures

use cai_check::ai::{
    fetch_outcome, interpret_response, AiMetrics, AiOutcome, FileSource, FixedSource,
    SourceFailure,
};
use cai_check::metrics::MetricKind;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_fenced_reply_with_prose() {
    let reply = indoc! {r#"
        Here is my assessment of the file:

        ```json
        {
          "loc": 12,
          "complexity1": 5,
          "complexity2": 6,
          "complexity3": 5,
          "notes": ["Deep else-if chain", "  "]
        }
        ```

        Let me know if you need more detail.
    "#};

    let outcome = interpret_response(reply);
    assert_eq!(
        outcome,
        AiOutcome::Parsed(AiMetrics {
            loc: Some(12.0),
            c1: Some(5.0),
            c2: Some(6.0),
            c3: Some(5.0),
            notes: vec!["Deep else-if chain".to_string()],
            warnings: vec![],
        })
    );
}

#[test]
fn test_short_aliases_and_partial_fields() {
    let outcome = interpret_response(r#"{"c1": 3.5, "c3": null}"#);
    assert_eq!(outcome.metric(MetricKind::C1), Some(3.5));
    assert_eq!(outcome.metric(MetricKind::C3), None);
    assert_eq!(outcome.metric(MetricKind::Loc), None);
    assert!(outcome.is_parsed());
}

#[test]
fn test_string_values_are_not_coerced() {
    let outcome = interpret_response(r#"{"loc": "12", "complexity1": 4}"#);
    let metrics = outcome.metrics().unwrap();
    assert_eq!(metrics.loc, None);
    assert_eq!(metrics.c1, Some(4.0));
    assert_eq!(metrics.warnings, vec!["'loc' is not a number".to_string()]);
}

#[test]
fn test_no_json_is_unavailable() {
    assert!(matches!(
        interpret_response("Sorry, I cannot help with that."),
        AiOutcome::Unavailable { .. }
    ));
    assert!(matches!(
        interpret_response("closing } before opening {"),
        AiOutcome::Unavailable { .. }
    ));
    assert!(matches!(interpret_response(""), AiOutcome::Unavailable { .. }));
}

#[test]
fn test_parse_errors_keep_the_candidate() {
    match interpret_response("result: {loc: 4} done") {
        AiOutcome::ParseError { raw_text, .. } => assert_eq!(raw_text, "{loc: 4}"),
        other => panic!("expected parse error, got {other:?}"),
    }

    // Two objects span into one invalid candidate
    assert!(matches!(
        interpret_response(r#"{"loc": 1} and {"loc": 2}"#),
        AiOutcome::ParseError { .. }
    ));
}

#[test]
fn test_failure_object_from_network_layer() {
    let outcome = interpret_response(r#"{"unavailable": true, "reason": "rate limited"}"#);
    assert_eq!(outcome, AiOutcome::unavailable("rate limited"));
}

#[test]
fn test_provider_failures_map_to_unavailable() {
    let timeout = FixedSource::failing(SourceFailure::Timeout(Duration::from_secs(20)));
    match fetch_outcome(&timeout, "prompt") {
        AiOutcome::Unavailable { reason } => assert!(reason.contains("timed out")),
        other => panic!("expected unavailable, got {other:?}"),
    }

    let status = FixedSource::failing(SourceFailure::Status(502));
    assert_eq!(
        fetch_outcome(&status, "prompt"),
        AiOutcome::unavailable("provider returned HTTP 502")
    );
}

#[test]
fn test_file_source_reads_saved_reply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reply.txt");
    std::fs::write(&path, r#"{"loc": 9, "c2": 2}"#).unwrap();

    let outcome = fetch_outcome(&FileSource::new(&path), "ignored");
    assert_eq!(outcome.metric(MetricKind::Loc), Some(9.0));
    assert_eq!(outcome.metric(MetricKind::C2), Some(2.0));
}

#[test]
fn test_outcome_serializes_with_kind_tag() {
    let json = serde_json::to_value(AiOutcome::parse_error("{x}", "bad")).unwrap();
    assert_eq!(json["kind"], "parseError");
    assert_eq!(json["rawText"], "{x}");
}
