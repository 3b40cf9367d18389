use anyhow::Result;
use cai_check::cli::{Cli, Commands};
use cai_check::commands::{self, AiInput, AnalyzeConfig, CompareConfig};
use clap::Parser;

fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level(verbosity));
    // RUST_LOG takes precedence over -v when set
    builder.parse_default_env();
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(commands::exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Prompt { source } => commands::handle_prompt(&source),
        Commands::Analyze {
            paths,
            format,
            output,
            plain,
            verbosity: _,
        } => {
            let settings = commands::resolve_config(cli.config.as_deref())?;
            commands::handle_analyze(
                AnalyzeConfig {
                    paths,
                    format,
                    output,
                    plain,
                },
                &settings,
            )
        }
        Commands::Compare {
            source,
            ai_response,
            ai_unavailable,
            format,
            output,
            plain,
            verbosity: _,
        } => {
            let settings = commands::resolve_config(cli.config.as_deref())?;
            commands::handle_compare(
                CompareConfig {
                    source,
                    ai: AiInput::from_args(ai_response, ai_unavailable),
                    format,
                    output,
                    plain,
                },
                &settings,
            )
        }
    }
}
