//! Configuration loaded from `.cai-check.toml`

mod core;
mod loader;

pub use self::core::{CaiConfig, IgnoreConfig, OutputConfig, RulesConfig, DEFAULT_CONFIG_TOML};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
