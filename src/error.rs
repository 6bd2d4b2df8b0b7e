//! Error types for the conversion pipelines.
//!
//! Per-key resolution gaps are deliberately NOT errors: a key without a
//! value for the requested environment is skipped silently. Everything here
//! aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON source; message carries serde_json's line/column
    /// locator, which is also exposed as fields.
    #[error("{}: {message}", path.display())]
    SourceParse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("{}: source has no header row", path.display())]
    EmptyCsv { path: PathBuf },

    /// Only raised under strict merge; the default append behavior treats an
    /// unparsable prior document as empty.
    #[error("{}: existing output document is unreadable: {message}", path.display())]
    CorruptExisting { path: PathBuf, message: String },

    #[error("failed to encode output document for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Wrap a serde_json failure with its source path and locator.
    pub fn parse(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        ConvertError::SourceParse {
            path: path.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ConvertError::SourceRead {
            path: path.into(),
            source: err,
        }
    }

    pub fn write(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ConvertError::OutputWrite {
            path: path.into(),
            source: err,
        }
    }
}

/// Result type for conversion operations.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
