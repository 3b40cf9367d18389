//! Boundary with the network collaborator that talks to the AI provider
//!
//! The core only sees a string or a failure. Retries, timeouts and
//! cancellation belong to the implementation behind [`ResponseSource`]; any
//! failure becomes an `Unavailable` outcome carrying the failure text.

use super::outcome::AiOutcome;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Why the provider produced no response text
#[derive(Debug, Clone, Error)]
pub enum SourceFailure {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider returned HTTP {0}")]
    Status(u16),
    #[error("could not read AI response: {0}")]
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for SourceFailure {
    fn from(e: std::io::Error) -> Self {
        Self::Io(Arc::new(e))
    }
}

/// Anything that can answer a prompt with raw response text
pub trait ResponseSource {
    fn fetch(&self, prompt: &str) -> Result<String, SourceFailure>;
}

/// Reads a previously saved response body from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResponseSource for FileSource {
    fn fetch(&self, _prompt: &str) -> Result<String, SourceFailure> {
        let bytes = std::fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Returns a fixed response or failure, for embedding and tests
#[derive(Debug, Clone)]
pub struct FixedSource {
    response: Result<String, SourceFailure>,
}

impl FixedSource {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
        }
    }

    pub fn failing(failure: SourceFailure) -> Self {
        Self {
            response: Err(failure),
        }
    }
}

impl ResponseSource for FixedSource {
    fn fetch(&self, _prompt: &str) -> Result<String, SourceFailure> {
        self.response.clone()
    }
}

impl AiOutcome {
    /// Interpret the result of a provider call
    pub fn from_source(result: Result<String, SourceFailure>) -> Self {
        match result {
            Ok(text) => super::interpret_response(&text),
            Err(failure) => {
                log::warn!("AI response unavailable: {}", failure);
                Self::unavailable(failure.to_string())
            }
        }
    }
}

/// Ask `source` for a response to `prompt` and interpret it
pub fn fetch_outcome(source: &dyn ResponseSource, prompt: &str) -> AiOutcome {
    AiOutcome::from_source(source.fetch(prompt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricKind;

    #[test]
    fn test_failures_become_unavailable() {
        let cases = [
            (SourceFailure::Timeout(Duration::from_secs(30)), "timed out"),
            (SourceFailure::Transport("connection reset".into()), "connection reset"),
            (SourceFailure::Status(503), "HTTP 503"),
        ];
        for (failure, expected) in cases {
            match fetch_outcome(&FixedSource::failing(failure), "prompt") {
                AiOutcome::Unavailable { reason } => assert!(reason.contains(expected), "{reason}"),
                other => panic!("expected unavailable, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_fixed_text_is_interpreted() {
        let outcome = fetch_outcome(&FixedSource::text("{\"loc\": 8}"), "prompt");
        assert_eq!(outcome.metric(MetricKind::Loc), Some(8.0));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let source = FileSource::new("/definitely/not/here.txt");
        assert!(matches!(
            fetch_outcome(&source, ""),
            AiOutcome::Unavailable { .. }
        ));
    }

    #[test]
    fn test_file_source_reads_body() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("response.txt");
        std::fs::write(&path, "Sure! {\"complexity1\": 5}").unwrap();
        let outcome = fetch_outcome(&FileSource::new(&path), "");
        assert_eq!(outcome.metric(MetricKind::C1), Some(5.0));
    }
}
