//! Error types for binding sources.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for binding source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while fetching the live binding table.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The query program could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The query program ran but reported failure.
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// A bindings file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output was not a JSON array of binding records.
    #[error("Invalid binding JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Every attempt failed.
    #[error("Failed to fetch binds after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: usize,
        #[source]
        last: Box<SourceError>,
    },
}

impl SourceError {
    /// Number of attempts made before giving up, if this is an exhaustion error.
    pub fn attempts(&self) -> Option<usize> {
        match self {
            Self::RetriesExhausted { attempts, .. } => Some(*attempts),
            _ => None,
        }
    }
}
