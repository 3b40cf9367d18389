use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CaiConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".cai-check.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a config file's contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<CaiConfig, String> {
    let config = toml::from_str::<CaiConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config.validate()?;
    Ok(config)
}

/// Try loading config from a specific path; problems are logged, not raised
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CaiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: PathBuf) -> CaiConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CaiConfig::default()
        })
}

/// Search from the current directory upwards
pub fn load_config() -> CaiConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CaiConfig::default()
        }
    }
}

/// Load an explicitly requested config file; any problem is an error
pub fn load_config_file(path: &Path) -> Result<CaiConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io_at(e, path))?;
    let config: CaiConfig = toml::from_str(&contents)?;
    config.validate().map_err(Error::configuration)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_and_validate_config("[thresholds]\ncomplexity = 15\n").unwrap();
        let thresholds = config.thresholds();
        assert_eq!(thresholds.complexity, 15);
        assert_eq!(thresholds.nesting, 4);
        assert_eq!(thresholds.loc_ratio, 1.5);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_and_validate_config("[thresholds\n").unwrap_err();
        assert!(err.contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_directory_ancestors_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_load_from_parent_directory() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[reconcile]\nminor_tolerance = 2.0\n",
        )
        .unwrap();
        let nested = root.path().join("src/module");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.reconcile().minor_tolerance, 2.0);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        let config = load_config_from(root.path().to_path_buf());
        assert_eq!(config, CaiConfig::default());
    }

    #[test]
    fn test_explicit_file_errors() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("missing.toml");
        assert!(load_config_file(&missing).is_err());

        let bad = root.path().join("bad.toml");
        fs::write(&bad, "[reconcile]\nminor_tolerance = -3.0\n").unwrap();
        let err = load_config_file(&bad).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_explicit_malformed_file_is_toml_error() {
        let root = TempDir::new().unwrap();
        let broken = root.path().join("broken.toml");
        fs::write(&broken, "[thresholds\ncomplexity = 3\n").unwrap();
        let err = load_config_file(&broken).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.is_user_fixable());
    }
}
