//! AI response pipeline
//!
//! Raw provider text goes through [`extract::extract_json`] (bracket span and
//! strict parse) and [`validate::validate`] (shape check against the field
//! table) to become an [`AiOutcome`]. Nothing here returns an error: every
//! failure is an outcome variant.

pub mod extract;
pub mod fields;
pub mod outcome;
pub mod prompt;
pub mod source;
pub mod validate;

pub use extract::{extract_json, find_candidate, Extraction};
pub use fields::{MetricField, METRIC_FIELDS};
pub use outcome::{AiMetrics, AiOutcome};
pub use prompt::build_prompt;
pub use source::{fetch_outcome, FileSource, FixedSource, ResponseSource, SourceFailure};
pub use validate::{validate, validate_value};

/// Interpret raw AI text with the default field table
pub fn interpret_response(text: &str) -> AiOutcome {
    interpret_response_with(text, &METRIC_FIELDS)
}

pub fn interpret_response_with(text: &str, fields: &[MetricField]) -> AiOutcome {
    let outcome = validate(extract_json(text), fields);
    match &outcome {
        AiOutcome::Parsed(_) => log::debug!("AI response parsed"),
        AiOutcome::ParseError { message, .. } => {
            log::warn!("AI response contained invalid JSON: {}", message)
        }
        AiOutcome::Unavailable { reason } => log::warn!("AI response unusable: {}", reason),
    }
    outcome
}
