//! Error types shared across the generation pipeline.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Typed failures for each stage of the persona pipeline.
///
/// Nothing is retried anywhere; every variant is surfaced to the command
/// layer, which decides whether to prompt for recovery or abort the run.
#[derive(Error, Debug)]
pub enum Error {
    /// A generation endpoint call failed or returned unusable output.
    #[error("generation endpoint failure: {0}")]
    Upstream(String),

    /// The model's reply did not match the expected structure.
    #[error("malformed model output: {0}")]
    MalformedResponse(String),

    /// The image download failed or timed out.
    #[error("image fetch failed: {0}")]
    Network(String),

    /// A filesystem operation failed.
    #[error("filesystem error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An expected persisted artifact is missing.
    #[error("profile file not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl Error {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Malformed-response error carrying a snippet of the offending reply.
    pub fn malformed(reason: impl Into<String>, reply: &str) -> Self {
        let reason = reason.into();
        if reply.trim().is_empty() {
            Self::MalformedResponse(reason)
        } else {
            Self::MalformedResponse(format!("{reason}; reply snippet: {}", preview(reply)))
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Truncated copy of a reply for error messages.
fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 200;
    let mut shortened: String = text.chars().take(MAX_CHARS).collect();
    if shortened.len() < text.len() {
        shortened.push('…');
    }
    shortened
}
