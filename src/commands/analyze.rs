use crate::analyzers;
use crate::config::CaiConfig;
use crate::io;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub format: Option<crate::cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_analyze(config: AnalyzeConfig, settings: &CaiConfig) -> Result<()> {
    super::formatting_for(config.plain, settings).apply();

    let mut reports =
        analyzers::analyze_paths_ignoring(&config.paths, &settings.ignore_patterns())
            .context("Static analysis failed")?;
    for report in &mut reports {
        report.skip_rules(settings.skipped_rules());
    }
    log::info!(
        "Analyzed {} file(s), {} rule finding(s)",
        reports.len(),
        reports.iter().map(|r| r.findings.len()).sum::<usize>()
    );

    let format = super::resolve_format(config.format, settings);
    let out = io::open_output(config.output.as_deref())?;
    let mut writer = io::create_writer(format, out);
    writer.write_static(&reports)?;
    Ok(())
}
