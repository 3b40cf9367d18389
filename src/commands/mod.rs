//! CLI command implementations.
//!
//! - **analyze**: static metrics for C files and directories
//! - **compare**: reconcile one file's static metrics with an AI response
//! - **prompt**: print the prompt for an AI provider
//! - **init**: write a default `.cai-check.toml`

pub mod analyze;
pub mod compare;
pub mod init;
pub mod prompt;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use compare::{handle_compare, AiInput, CompareConfig};
pub use init::{init_config, init_config_in};
pub use prompt::handle_prompt;

use crate::cli;
use crate::config::{self, CaiConfig};
use crate::errors::Error;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::output::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;

/// Explicit `--config` files must load; otherwise search upwards from the
/// working directory
pub fn resolve_config(explicit: Option<&Path>) -> Result<CaiConfig> {
    match explicit {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Process exit status for a failed command: 2 when the user can fix the
/// input or settings, 1 otherwise
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let fixable = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .is_some_and(Error::is_user_fixable);
    if fixable {
        2
    } else {
        1
    }
}

/// Command-line format, then the configured default, then terminal
pub(crate) fn resolve_format(
    requested: Option<cli::OutputFormat>,
    config: &CaiConfig,
) -> OutputFormat {
    requested
        .map(OutputFormat::from)
        .or_else(|| config.default_format().and_then(OutputFormat::parse))
        .unwrap_or(OutputFormat::Terminal)
}

pub(crate) fn formatting_for(plain: bool, config: &CaiConfig) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }
    let mut formatting = FormattingConfig::from_env();
    match config.use_color() {
        Some(true) if formatting.color == ColorMode::Auto => formatting.color = ColorMode::Always,
        Some(false) => formatting.color = ColorMode::Never,
        _ => {}
    }
    formatting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    fn config_with_format(format: &str) -> CaiConfig {
        CaiConfig {
            output: Some(OutputConfig {
                default_format: Some(format.to_string()),
                use_color: Some(false),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_precedence() {
        let config = config_with_format("markdown");
        assert_eq!(
            resolve_format(Some(cli::OutputFormat::Json), &config),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, &config), OutputFormat::Markdown);
        assert_eq!(
            resolve_format(None, &CaiConfig::default()),
            OutputFormat::Terminal
        );
    }

    #[test]
    fn test_plain_and_configured_color() {
        assert_eq!(
            formatting_for(true, &CaiConfig::default()).color,
            ColorMode::Never
        );
        assert_eq!(
            formatting_for(false, &config_with_format("json")).color,
            ColorMode::Never
        );
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = resolve_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_for_internal_failures() {
        assert_eq!(exit_code(&anyhow::anyhow!("writer closed")), 1);
        let wrapped = anyhow::Error::new(Error::configuration("bad tolerance"))
            .context("Failed to load configuration");
        assert_eq!(exit_code(&wrapped), 2);
    }
}
