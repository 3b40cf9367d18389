use serde::{Deserialize, Serialize};
use std::fmt;

/// The four metrics reported by both the static engine and the AI provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Loc,
    C1,
    C2,
    C3,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [Self::Loc, Self::C1, Self::C2, Self::C3];

    /// Short wire name (`loc`, `c1`, `c2`, `c3`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loc => "loc",
            Self::C1 => "c1",
            Self::C2 => "c2",
            Self::C3 => "c3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Loc => "Lines of code",
            Self::C1 => "Complexity 1",
            Self::C2 => "Complexity 2",
            Self::C3 => "Complexity 3",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
