//! Shape validation of extracted AI JSON
//!
//! Only a non-object value is rejected. Each metric is looked up through its
//! alias list and is independently a number or absent; `null`, missing and
//! non-numeric values all count as absent.

use super::extract::Extraction;
use super::fields::{is_known_key, MetricField, NOTES_KEY, REASON_KEY, UNAVAILABLE_KEY};
use super::outcome::{AiMetrics, AiOutcome};
use serde_json::{Map, Value};

pub const DEFAULT_UNAVAILABLE_REASON: &str = "AI analysis unavailable";

/// Turn an extraction into a typed outcome using the given field table
pub fn validate(extraction: Extraction<'_>, fields: &[MetricField]) -> AiOutcome {
    match extraction {
        Extraction::NotFound { reason } => AiOutcome::unavailable(reason),
        Extraction::Invalid { raw, message } => AiOutcome::parse_error(raw, message),
        Extraction::Json { raw, value } => validate_value(raw, &value, fields),
    }
}

/// Validate an already-parsed value. `raw` is kept for diagnostics.
pub fn validate_value(raw: &str, value: &Value, fields: &[MetricField]) -> AiOutcome {
    let Value::Object(object) = value else {
        return AiOutcome::parse_error(
            raw,
            format!("expected a JSON object, found {}", value_kind(value)),
        );
    };

    if object.get(UNAVAILABLE_KEY) == Some(&Value::Bool(true)) {
        let reason = object
            .get(REASON_KEY)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_UNAVAILABLE_REASON);
        return AiOutcome::unavailable(reason);
    }

    let mut metrics = AiMetrics {
        notes: collect_notes(object.get(NOTES_KEY)),
        ..Default::default()
    };

    for field in fields {
        let value = lookup_number(object, field, &mut metrics.warnings);
        metrics.set(field.kind, value);
    }

    for key in object.keys().filter(|key| !is_known_key(fields, key)) {
        log::debug!("Ignoring unexpected key in AI response: {}", key);
    }

    AiOutcome::Parsed(metrics)
}

/// First alias holding a number wins; aliases holding other types are noted
fn lookup_number(
    object: &Map<String, Value>,
    field: &MetricField,
    warnings: &mut Vec<String>,
) -> Option<f64> {
    for alias in field.aliases {
        match object.get(*alias) {
            None | Some(Value::Null) => continue,
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_f64().filter(|v| v.is_finite()) {
                    return Some(v);
                }
            }
            Some(other) => {
                log::warn!(
                    "AI field '{}' is {} rather than a number; treating as absent",
                    alias,
                    value_kind(other)
                );
                warnings.push(format!("'{}' is not a number", alias));
            }
        }
    }
    None
}

fn collect_notes(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|note| !note.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(note)) if !note.trim().is_empty() => vec![note.trim().to_string()],
        _ => Vec::new(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
