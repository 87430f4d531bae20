use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessLogError {
    #[error("access log '{path}' not found")]
    InputMissing { path: PathBuf },

    #[error("failed to read access log {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results to {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}
