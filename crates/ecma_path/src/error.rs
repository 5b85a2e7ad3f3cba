//! Errors of the external editor helpers
//!
//! Path resolution itself never fails; only locating the TypeScript source
//! of a compiled class touches the filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ecma_path operations
pub type PathResult<T> = Result<T, PathError>;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Failed to read tsconfig.json at {}: {source}", path.display())]
    TsConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed parsing tsconfig.json: {0}")]
    TsConfigParse(#[from] serde_json::Error),

    #[error("tsconfig.json has no compilerOptions.{0}")]
    MissingCompilerOption(&'static str),

    #[error("TypeScript source doesn't exist at: {0}")]
    SourceNotFound(PathBuf),

    #[error("Not a compiled script class: {0}")]
    NotAClassScript(String),
}
