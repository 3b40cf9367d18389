use crate::ai::build_prompt;
use crate::analyzers::read_source;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_prompt(source: &Path) -> Result<()> {
    let text =
        read_source(source).with_context(|| format!("Failed to read {}", source.display()))?;
    print!("{}", build_prompt(&text));
    Ok(())
}
