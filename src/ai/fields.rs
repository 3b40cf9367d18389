//! Recognized metric keys in AI responses

use crate::metrics::MetricKind;

/// A metric the validator looks for, with the JSON keys it accepts in
/// priority order. `canonical` is the key requested in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricField {
    pub kind: MetricKind,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl MetricField {
    pub fn accepts(&self, key: &str) -> bool {
        self.aliases.contains(&key)
    }
}

pub const METRIC_FIELDS: [MetricField; 4] = [
    MetricField {
        kind: MetricKind::Loc,
        canonical: "loc",
        aliases: &["loc"],
    },
    MetricField {
        kind: MetricKind::C1,
        canonical: "complexity1",
        aliases: &["complexity1", "c1"],
    },
    MetricField {
        kind: MetricKind::C2,
        canonical: "complexity2",
        aliases: &["complexity2", "c2"],
    },
    MetricField {
        kind: MetricKind::C3,
        canonical: "complexity3",
        aliases: &["complexity3", "c3"],
    },
];

pub const NOTES_KEY: &str = "notes";
pub const UNAVAILABLE_KEY: &str = "unavailable";
pub const REASON_KEY: &str = "reason";

/// Whether `key` is understood by the validator for the given table
pub fn is_known_key(fields: &[MetricField], key: &str) -> bool {
    key == NOTES_KEY
        || key == UNAVAILABLE_KEY
        || key == REASON_KEY
        || fields.iter().any(|field| field.accepts(key))
}
