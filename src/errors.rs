//! Shared error types for the application
//!
//! The static engine and the AI pipeline are total: they never return these
//! errors. They cover the edges around them (reading sources, loading
//! configuration, walking directories, writing reports).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cai-check operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Directory walking errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Wrap an I/O error that happened on `path`
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the user can fix this error by changing input or settings
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Configuration(_) | Self::Toml(_) => true,
            // Without an underlying I/O error the path itself was rejected
            Self::FileSystem { source: None, .. } => true,
            Self::FileSystem {
                source: Some(e), ..
            } => matches!(
                e.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
            ),
            _ => false,
        }
    }
}

/// Result type alias for cai-check operations
pub type Result<T> = std::result::Result<T, Error>;
