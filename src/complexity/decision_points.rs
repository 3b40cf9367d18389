//! Lexical decision point scanning
//!
//! Counts the tokens that introduce a branch: `if`, `else if` (one unit),
//! `for`, `while`, `case`, the ternary `?` and every `&&` / `||`.
//!
//! The scan is a single regex pass over the raw text. It does not know about
//! string literals or comments, so tokens inside them are counted too. `do`,
//! `default` and `switch` are not decision points.
//!
//! Keyword boundaries are ASCII word boundaries: only `[A-Za-z0-9_]` counts
//! as a word character, so `ifé(x)` still contains an `if`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DECISION_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?-u:\b)if(?-u:\b)",
        r"|(?-u:\b)else\s+if(?-u:\b)",
        r"|(?-u:\b)for(?-u:\b)",
        r"|(?-u:\b)while(?-u:\b)",
        r"|(?-u:\b)case(?-u:\b)",
        r"|\?|&&|\|\|",
    ))
    .unwrap()
});

/// Category of a matched decision token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionToken {
    If,
    ElseIf,
    Loop,
    Case,
    Ternary,
    Logical,
}

impl DecisionToken {
    fn from_match(text: &str) -> Self {
        match text {
            "if" => Self::If,
            "for" | "while" => Self::Loop,
            "case" => Self::Case,
            "?" => Self::Ternary,
            "&&" | "||" => Self::Logical,
            _ => Self::ElseIf,
        }
    }
}

/// Decision point totals with a per-category breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPoints {
    pub total: u32,
    pub branches: u32,
    pub else_branches: u32,
    pub loops: u32,
    pub cases: u32,
    pub ternaries: u32,
    pub logical_operators: u32,
}

impl DecisionPoints {
    fn record(&mut self, token: DecisionToken) {
        self.total += 1;
        match token {
            DecisionToken::If => self.branches += 1,
            DecisionToken::ElseIf => self.else_branches += 1,
            DecisionToken::Loop => self.loops += 1,
            DecisionToken::Case => self.cases += 1,
            DecisionToken::Ternary => self.ternaries += 1,
            DecisionToken::Logical => self.logical_operators += 1,
        }
    }
}

/// Iterate the decision tokens of `source` in order of appearance
pub fn decision_tokens(source: &str) -> impl Iterator<Item = DecisionToken> + '_ {
    DECISION_TOKENS
        .find_iter(source)
        .map(|m| DecisionToken::from_match(m.as_str()))
}

pub fn scan_decision_points(source: &str) -> DecisionPoints {
    decision_tokens(source).fold(DecisionPoints::default(), |mut points, token| {
        points.record(token);
        points
    })
}

/// Total decision points in `source`
pub fn count_decision_points(source: &str) -> u32 {
    scan_decision_points(source).total
}
