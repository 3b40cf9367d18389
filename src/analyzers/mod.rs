//! Static analysis report builder
//!
//! Composes the line classifier, decision point scanner, nesting tracker and
//! complexity calculator into one immutable [`StaticReport`] per source text.

use crate::complexity::{
    cfg_metrics, max_nesting_depth, scan_decision_points, CfgMetrics, ComplexityScores,
    DecisionPoints,
};
use crate::errors::{Error, Result};
use crate::io::walker::FileWalker;
use crate::metrics::{LocCounter, MetricKind};
use crate::rules::{self, Finding};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Metrics computed directly from C source text.
///
/// Invariants: `c1 == c2 == decision_points + 1` and every complexity number
/// is at least 1, even for empty input. `cfg` is computed independently and
/// never feeds `c1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticReport {
    pub loc: u32,
    pub decision_points: u32,
    pub nesting_depth: u32,
    pub c1: u32,
    pub c2: u32,
    pub c3: u32,
    pub breakdown: DecisionPoints,
    pub cfg: CfgMetrics,
}

impl StaticReport {
    /// Static value of a reconciled metric
    pub fn metric(&self, kind: MetricKind) -> u32 {
        match kind {
            MetricKind::Loc => self.loc,
            MetricKind::C1 => self.c1,
            MetricKind::C2 => self.c2,
            MetricKind::C3 => self.c3,
        }
    }
}

/// Analyze one source text. Never fails; non-C or empty text degrades to
/// `loc = 0` and complexity 1.
pub fn analyze_source(source: &str) -> StaticReport {
    let loc = LocCounter::new().count_content(source).loc();
    let breakdown = scan_decision_points(source);
    let scores = ComplexityScores::from_decision_points(breakdown.total);

    StaticReport {
        loc: u32::try_from(loc).unwrap_or(u32::MAX),
        decision_points: breakdown.total,
        nesting_depth: max_nesting_depth(source),
        c1: scores.c1,
        c2: scores.c2,
        c3: scores.c3,
        breakdown,
        cfg: cfg_metrics(source),
    }
}

/// Static report and rule findings tied to the file they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub report: StaticReport,
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Drop findings for the given rule ids
    pub fn skip_rules(&mut self, skip: &[String]) {
        self.findings
            .retain(|finding| !skip.iter().any(|id| id == finding.rule_id));
    }
}

/// Read a source file (invalid UTF-8 is replaced, not rejected)
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io_at(e, path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn analyze_file(path: &Path) -> Result<FileReport> {
    let source = read_source(path)?;
    log::debug!("Analyzing {} ({} bytes)", path.display(), source.len());
    let findings = rules::check_source(&source);
    if !findings.is_empty() {
        log::debug!("{}: {} rule finding(s)", path.display(), findings.len());
    }
    Ok(FileReport {
        path: path.to_path_buf(),
        report: analyze_source(&source),
        findings,
    })
}

/// Analyze every C file under `paths` in parallel.
///
/// Files are analyzed independently; results are sorted by path.
pub fn analyze_paths(paths: &[PathBuf]) -> Result<Vec<FileReport>> {
    analyze_paths_ignoring(paths, &[])
}

/// Like [`analyze_paths`], skipping walked files that match any ignore pattern
pub fn analyze_paths_ignoring(
    paths: &[PathBuf],
    ignore_patterns: &[String],
) -> Result<Vec<FileReport>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(Error::file_system(
                format!("{} does not exist", path.display()),
                path.clone(),
            ));
        }
        if path.is_dir() {
            let walker =
                FileWalker::new(path.clone()).with_ignore_patterns(ignore_patterns.to_vec());
            files.extend(walker.walk()?);
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();

    files
        .par_iter()
        .map(|path| analyze_file(path))
        .collect::<Result<Vec<_>>>()
}
