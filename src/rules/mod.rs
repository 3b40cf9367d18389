//! Heuristic MISRA C:2012 checks
//!
//! A small subset of rules checked lexically over the source text. Findings
//! are hints for a reviewer, not a compliance verdict.

pub mod scan;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static GOTO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)goto\s+[A-Za-z_]\w*\s*;").unwrap());
static DYNAMIC_MEMORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)(malloc|calloc|realloc|free)\s*\(").unwrap());
static NON_LOCAL_JUMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)(setjmp|longjmp)\s*\(").unwrap());
static RETURN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\b)return(?-u:\b)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Required,
    Advisory,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Advisory => "advisory",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A checked rule and the function that finds its violations
pub struct Rule {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    check: fn(&str) -> Vec<Hit>,
}

/// Where a rule fired, before the rule's metadata is attached
struct Hit {
    line: usize,
    message: String,
    evidence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub rule_id: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub line: usize,
    pub message: String,
    pub evidence: String,
}

pub const RULES: &[Rule] = &[
    Rule {
        id: "MISRA-C-2012-Rule-14.4",
        title: "The goto statement shall not be used",
        severity: Severity::Required,
        check: check_goto,
    },
    Rule {
        id: "MISRA-C-2012-Rule-17.2",
        title: "Recursion shall not be used",
        severity: Severity::Required,
        check: check_recursion,
    },
    Rule {
        id: "MISRA-C-2012-Rule-15.3",
        title: "All switch statements shall be complete (include a default)",
        severity: Severity::Required,
        check: check_switch_default,
    },
    Rule {
        id: "MISRA-C-2012-Rule-15.4",
        title: "The default clause should be the last clause in a switch statement",
        severity: Severity::Advisory,
        check: check_default_last,
    },
    Rule {
        id: "MISRA-C-2012-Rule-15.5",
        title: "A function should have a single point of exit",
        severity: Severity::Advisory,
        check: check_single_exit,
    },
    Rule {
        id: "MISRA-C-2012-Rule-21.3",
        title: "The memory allocation and deallocation functions of <stdlib.h> shall not be used",
        severity: Severity::Required,
        check: check_dynamic_memory,
    },
    Rule {
        id: "MISRA-C-2012-Rule-21.4",
        title: "The macro/typedef identifiers setjmp and longjmp shall not be used",
        severity: Severity::Required,
        check: check_non_local_jump,
    },
];

pub fn find_rule(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.id == id)
}

/// Run every rule whose id is not in `skip`; findings are ordered by line
pub fn check_source_skipping(source: &str, skip: &[String]) -> Vec<Finding> {
    let mut findings: Vec<Finding> = RULES
        .iter()
        .filter(|rule| !skip.iter().any(|id| id == rule.id))
        .flat_map(|rule| {
            (rule.check)(source).into_iter().map(move |hit| Finding {
                rule_id: rule.id,
                title: rule.title,
                severity: rule.severity,
                line: hit.line,
                message: hit.message,
                evidence: hit.evidence,
            })
        })
        .collect();
    findings.sort_by_key(|f| f.line);
    findings
}

pub fn check_source(source: &str) -> Vec<Finding> {
    check_source_skipping(source, &[])
}

fn check_goto(source: &str) -> Vec<Hit> {
    scan::line_hits(source, &GOTO)
        .into_iter()
        .map(|hit| Hit {
            line: hit.line,
            message: "goto used".to_string(),
            evidence: hit.text.trim().to_string(),
        })
        .collect()
}

fn check_recursion(source: &str) -> Vec<Hit> {
    scan::functions(source)
        .into_iter()
        .filter_map(|function| {
            let call = Regex::new(&format!(
                r"(?-u:\b){}\s*\(",
                regex::escape(function.name)
            ))
            .ok()?;
            let evidence = function.body.lines().find(|line| call.is_match(line))?;
            Some(Hit {
                line: function.line,
                message: format!(
                    "Function \"{}\" appears to call itself (recursion)",
                    function.name
                ),
                evidence: evidence.trim().to_string(),
            })
        })
        .collect()
}

fn check_switch_default(source: &str) -> Vec<Hit> {
    scan::switches(source)
        .into_iter()
        .filter(|switch| !switch.has_default())
        .map(|switch| Hit {
            line: switch.line,
            message: "switch statement has no default clause".to_string(),
            evidence: "Missing \"default:\"".to_string(),
        })
        .collect()
}

fn check_default_last(source: &str) -> Vec<Hit> {
    scan::switches(source)
        .into_iter()
        .filter(|switch| switch.has_default() && !switch.default_is_last())
        .map(|switch| Hit {
            line: switch.line,
            message: "default clause does not appear last in switch".to_string(),
            evidence: "default is followed by other case labels".to_string(),
        })
        .collect()
}

fn check_single_exit(source: &str) -> Vec<Hit> {
    scan::functions(source)
        .into_iter()
        .filter_map(|function| {
            let returns = RETURN.find_iter(function.body).count();
            (returns > 1).then(|| Hit {
                line: function.line,
                message: format!(
                    "Function \"{}\" has {} return statements",
                    function.name, returns
                ),
                evidence: "Multiple returns".to_string(),
            })
        })
        .collect()
}

fn check_dynamic_memory(source: &str) -> Vec<Hit> {
    scan::line_hits(source, &DYNAMIC_MEMORY)
        .into_iter()
        .map(|hit| Hit {
            line: hit.line,
            message: format!("Dynamic memory function \"{}\" used", hit.matched),
            evidence: hit.text.trim().to_string(),
        })
        .collect()
}

fn check_non_local_jump(source: &str) -> Vec<Hit> {
    scan::line_hits(source, &NON_LOCAL_JUMP)
        .into_iter()
        .map(|hit| Hit {
            line: hit.line,
            message: format!("\"{}\" used", hit.matched),
            evidence: hit.text.trim().to_string(),
        })
        .collect()
}
