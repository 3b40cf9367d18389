//! Locating a JSON object inside free-form AI text
//!
//! Providers often wrap the object in prose or Markdown fences, so the span
//! from the first `{` to the last `}` is cut out before parsing. The span is
//! parsed strictly: it either parses as a whole or the response is reported
//! as a parse error.

use serde_json::Value;

/// What was found in a raw AI response
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<'a> {
    /// No candidate span (empty text, no braces, or `}` before `{`)
    NotFound { reason: &'static str },
    /// A candidate span that is not valid JSON
    Invalid { raw: &'a str, message: String },
    /// A candidate span that parsed
    Json { raw: &'a str, value: Value },
}

pub const EMPTY_RESPONSE: &str = "empty AI response";
pub const NO_JSON_FOUND: &str = "no JSON object found in AI response";

/// Span from the first `{` to the last `}` inclusive
pub fn find_candidate(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

pub fn extract_json(text: &str) -> Extraction<'_> {
    if text.trim().is_empty() {
        return Extraction::NotFound {
            reason: EMPTY_RESPONSE,
        };
    }

    let Some(raw) = find_candidate(text) else {
        log::debug!("No brace pair in AI response ({} bytes)", text.len());
        return Extraction::NotFound {
            reason: NO_JSON_FOUND,
        };
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Extraction::Json { raw, value },
        Err(e) => {
            log::debug!("Candidate JSON failed to parse: {}", e);
            Extraction::Invalid {
                raw,
                message: e.to_string(),
            }
        }
    }
}
