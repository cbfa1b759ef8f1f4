//! Error types for dataset construction.

use std::path::PathBuf;

use gadir_ingest::IngestError;
use thiserror::Error;

/// Errors raised while building or writing a labeled dataset.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Input could not be read or lacks a required column.
    #[error(transparent)]
    DataFormat(#[from] IngestError),

    /// Rows without a label cannot be written as integer labels.
    #[error(
        "{missing_labels} row(s) have no label; unmapped group values: [{}]",
        .unmapped_groups.join(", ")
    )]
    TypeCoercion {
        missing_labels: usize,
        unmapped_groups: Vec<String>,
    },

    /// Output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
