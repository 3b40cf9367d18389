use crate::ai::{build_prompt, fetch_outcome, AiOutcome, FileSource};
use crate::analyzers::{analyze_source, read_source};
use crate::comparison::Reconciler;
use crate::config::CaiConfig;
use crate::io;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const NO_AI_RESPONSE: &str = "no AI response supplied";

/// Where the AI side of a comparison comes from
#[derive(Debug, Clone, PartialEq)]
pub enum AiInput {
    ResponseFile(PathBuf),
    Unavailable(String),
    Missing,
}

impl AiInput {
    pub fn from_args(ai_response: Option<PathBuf>, ai_unavailable: Option<String>) -> Self {
        match (ai_response, ai_unavailable) {
            (Some(path), _) => Self::ResponseFile(path),
            (None, Some(reason)) => Self::Unavailable(reason),
            (None, None) => Self::Missing,
        }
    }

    pub fn outcome(&self, prompt: &str) -> AiOutcome {
        match self {
            Self::ResponseFile(path) => fetch_outcome(&FileSource::new(path.clone()), prompt),
            Self::Unavailable(reason) => AiOutcome::unavailable(reason.clone()),
            Self::Missing => AiOutcome::unavailable(NO_AI_RESPONSE),
        }
    }
}

pub struct CompareConfig {
    pub source: PathBuf,
    pub ai: AiInput,
    pub format: Option<crate::cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_compare(config: CompareConfig, settings: &CaiConfig) -> Result<()> {
    let formatting = super::formatting_for(config.plain, settings);
    formatting.apply();

    let source = read_source(&config.source)
        .with_context(|| format!("Failed to read {}", config.source.display()))?;
    let static_report = analyze_source(&source);
    let outcome = config.ai.outcome(&build_prompt(&source));

    let reconciler = Reconciler::new(
        settings.reconcile(),
        settings.thresholds(),
        &formatting.precision,
    );
    let report = reconciler.reconcile(&static_report, &outcome);
    log::info!(
        "{}: agreement {}",
        config.source.display(),
        report.agreement
    );

    let format = super::resolve_format(config.format, settings);
    let out = io::open_output(config.output.as_deref())?;
    let mut writer = io::create_writer(format, out);
    writer.write_comparison(&report)?;
    Ok(())
}
