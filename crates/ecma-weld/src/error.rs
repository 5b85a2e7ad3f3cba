//! Error types for declaration export
//!
//! Generation itself never fails; only reading a documentation model and
//! writing the finished declaration file can.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ecma-weld operations
pub type WeldResult<T> = Result<T, WeldError>;

/// Main error type for ecma-weld
#[derive(Debug, Error)]
pub enum WeldError {
    /// The declaration file could not be opened or written
    #[error("Cannot write declaration file {}: {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The documentation model file could not be read
    #[error("Cannot read documentation model {}: {source}", path.display())]
    ModelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The documentation model is not valid JSON for the model shape
    #[error("Invalid documentation model: {0}")]
    ModelParse(#[from] serde_json::Error),
}

impl WeldError {
    /// Create a destination error
    pub fn destination(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WeldError::DestinationUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Create a model read error
    pub fn model_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WeldError::ModelRead {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is the export's destination failure
    pub fn is_destination_unwritable(&self) -> bool {
        matches!(self, WeldError::DestinationUnwritable { .. })
    }
}
