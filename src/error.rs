//! Error handling for the exporter.
//!
//! Corpus faults abort the run; whatever statements were already flushed
//! stay on the stream. There is no retry and no completion marker.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the exporter
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to read corpus file {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse corpus file {path}: {source}")]
    CorpusParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type ExportResult<T> = Result<T, ExportError>;
