use crate::analyzers::FileReport;
use crate::comparison::{Agreement, ComparisonReport};
use crate::rules::Severity;
use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse the names used in `[output] default_format`
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_static(&mut self, reports: &[FileReport]) -> anyhow::Result<()>;
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    generated_at: DateTime<Utc>,
    version: &'static str,
    #[serde(flatten)]
    body: Body<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Body<'a> {
    Files(&'a [FileReport]),
    Comparison(&'a ComparisonReport),
}

impl<'a> Envelope<'a> {
    fn new(body: Body<'a>) -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            body,
        }
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_envelope(&mut self, envelope: &Envelope<'_>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(envelope)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_static(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        self.write_envelope(&Envelope::new(Body::Files(reports)))
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_envelope(&Envelope::new(Body::Comparison(report)))
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_list(&mut self, heading: &str, items: &[String]) -> anyhow::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {heading}")?;
        writeln!(self.writer)?;
        for item in items {
            writeln!(self.writer, "- {item}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_static(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        self.write_header("Static Analysis Report")?;
        writeln!(
            self.writer,
            "| File | LOC | Decision Points | Nesting | C1 | C2 | C3 | CFG V(G) |"
        )?;
        writeln!(
            self.writer,
            "|------|-----|-----------------|---------|----|----|----|----------|"
        )?;
        for file in reports {
            let r = &file.report;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                file.path.display(),
                r.loc,
                r.decision_points,
                r.nesting_depth,
                r.c1,
                r.c2,
                r.c3,
                r.cfg.cyclomatic_complexity
            )?;
        }
        writeln!(self.writer)?;

        if reports.iter().any(|f| !f.findings.is_empty()) {
            writeln!(self.writer, "## Rule Findings")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| File | Line | Rule | Severity | Message |")?;
            writeln!(self.writer, "|------|------|------|----------|---------|")?;
            for file in reports {
                for finding in &file.findings {
                    writeln!(
                        self.writer,
                        "| {} | {} | {} | {} | {} |",
                        file.path.display(),
                        finding.line,
                        finding.rule_id,
                        finding.severity,
                        finding.message
                    )?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_header("Static vs AI Comparison")?;
        writeln!(self.writer, "**Agreement:** {}", report.agreement)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Static | AI | Delta | Status |")?;
        writeln!(self.writer, "|--------|--------|----|-------|--------|")?;
        for m in &report.metrics {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                m.metric.label(),
                m.display_static,
                m.display_ai,
                m.display_delta,
                m.status
            )?;
        }
        writeln!(self.writer)?;
        self.write_list("Notes", &report.notes)?;
        self.write_list("Recommendations", &report.recommendations)?;
        Ok(())
    }
}

/// Human-readable report; colors follow the `colored` global override
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

fn colored_severity(severity: Severity) -> ColoredString {
    match severity {
        Severity::Required => severity.as_str().yellow(),
        Severity::Advisory => severity.as_str().dimmed(),
    }
}

fn colored_status(status: Agreement) -> ColoredString {
    match status {
        Agreement::Match => status.as_str().green(),
        Agreement::MinorDivergence => status.as_str().yellow(),
        Agreement::MajorDivergence => status.as_str().red(),
        Agreement::NotComparable => status.as_str().dimmed(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_static(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        self.write_header("Static Analysis Report")?;
        for file in reports {
            let r = &file.report;
            writeln!(self.writer, "{}", file.path.display().to_string().bold())?;
            writeln!(
                self.writer,
                "  LOC: {}  Decision points: {}  Nesting: {}",
                r.loc, r.decision_points, r.nesting_depth
            )?;
            writeln!(
                self.writer,
                "  C1: {}  C2: {}  C3: {}",
                r.c1, r.c2, r.c3
            )?;
            writeln!(
                self.writer,
                "  CFG: {} nodes, {} edges, V(G) {}",
                r.cfg.nodes, r.cfg.edges, r.cfg.cyclomatic_complexity
            )?;
            for finding in &file.findings {
                writeln!(
                    self.writer,
                    "  line {}: {} ({}) {}",
                    finding.line,
                    finding.rule_id,
                    colored_severity(finding.severity),
                    finding.message
                )?;
            }
        }
        if reports.is_empty() {
            writeln!(self.writer, "No C sources found.")?;
        }
        Ok(())
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_header("Static vs AI Comparison")?;
        writeln!(
            self.writer,
            "{:<14} {:>8} {:>8} {:>8}  Status",
            "Metric", "Static", "AI", "Delta"
        )?;
        for m in &report.metrics {
            writeln!(
                self.writer,
                "{:<14} {:>8} {:>8} {:>8}  {}",
                m.metric.label(),
                m.display_static,
                m.display_ai,
                m.display_delta,
                colored_status(m.status)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Agreement: {}",
            colored_status(report.agreement).bold()
        )?;

        if !report.notes.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Notes:".bold())?;
            for note in &report.notes {
                writeln!(self.writer, "  - {note}")?;
            }
        }
        if !report.recommendations.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Recommendations:".bold())?;
            for rec in &report.recommendations {
                writeln!(self.writer, "  - {rec}")?;
            }
        }
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, out: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}
