use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by extraction and the session operations built on it.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("unsupported file type: {name} (expected .zip or .json)")]
    UnsupportedFileType { name: String },

    #[error("no qualifying files found in {name}: expected JSON files inside a data directory")]
    NoQualifyingFiles { name: String },

    #[error("malformed JSON in {}: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O failure at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("session not found or expired: {session_id}")]
    SessionNotFound { session_id: String },
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable identifier for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::NoFileSelected => "no_file_selected",
            ExtractError::UnsupportedFileType { .. } => "unsupported_file_type",
            ExtractError::NoQualifyingFiles { .. } => "no_qualifying_files",
            ExtractError::MalformedJson { .. } => "malformed_json",
            ExtractError::Io { .. } => "io_failure",
            ExtractError::SessionNotFound { .. } => "session_not_found",
        }
    }
}

pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
