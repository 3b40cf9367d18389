use crate::metrics::MetricKind;
use serde::Serialize;

/// Metrics reported by the AI provider. Each value is independently either a
/// number or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AiMetrics {
    pub loc: Option<f64>,
    pub c1: Option<f64>,
    pub c2: Option<f64>,
    pub c3: Option<f64>,
    pub notes: Vec<String>,
    /// Diagnostics about keys that were present but unusable
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl AiMetrics {
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Loc => self.loc,
            MetricKind::C1 => self.c1,
            MetricKind::C2 => self.c2,
            MetricKind::C3 => self.c3,
        }
    }

    pub fn set(&mut self, kind: MetricKind, value: Option<f64>) {
        let slot = match kind {
            MetricKind::Loc => &mut self.loc,
            MetricKind::C1 => &mut self.c1,
            MetricKind::C2 => &mut self.c2,
            MetricKind::C3 => &mut self.c3,
        };
        *slot = value;
    }
}

/// Result of interpreting one AI response. Built once, never edited; a new
/// response produces a new outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AiOutcome {
    /// A JSON object was found and has the expected shape
    Parsed(AiMetrics),
    /// A JSON-like fragment was found but did not parse or was mis-shaped
    ParseError {
        #[serde(rename = "rawText")]
        raw_text: String,
        message: String,
    },
    /// No JSON fragment, or the upstream call failed before producing text
    Unavailable { reason: String },
}

impl AiOutcome {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn parse_error(raw_text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            raw_text: raw_text.into(),
            message: message.into(),
        }
    }

    /// AI value for `kind`; always `None` unless the outcome is `Parsed`
    pub fn metric(&self, kind: MetricKind) -> Option<f64> {
        match self {
            Self::Parsed(metrics) => metrics.get(kind),
            Self::ParseError { .. } | Self::Unavailable { .. } => None,
        }
    }

    pub fn metrics(&self) -> Option<&AiMetrics> {
        match self {
            Self::Parsed(metrics) => Some(metrics),
            _ => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// Short status line for reports
    pub fn describe(&self) -> String {
        match self {
            Self::Parsed(_) => "AI response parsed".to_string(),
            Self::ParseError { message, .. } => format!("AI response could not be parsed: {message}"),
            Self::Unavailable { reason } => format!("AI analysis unavailable: {reason}"),
        }
    }
}
