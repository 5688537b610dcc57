//! Error types for the training pipeline.
//!
//! Each stage returns a `PipelineError` so a failure can be traced back to
//! the stage that produced it instead of surfacing from inside polars.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by pipeline stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file is missing or cannot be read as delimited text.
    #[error("Failed to read dataset {path}: {message}")]
    File { path: PathBuf, message: String },

    /// A column required by the pipeline is absent or has an unusable type.
    #[error("Schema error: {0}")]
    Schema(String),

    /// No rows survived the missing-value drop.
    #[error("Dataset is empty after dropping rows with missing values ({dropped} row(s) dropped)")]
    EmptyDataset { dropped: usize },

    /// Feature matrix and target vector disagree on row count.
    #[error("Row count mismatch: feature matrix has {features} row(s), target has {targets}")]
    RowMismatch { features: usize, targets: usize },

    /// The target cannot be mapped to class labels.
    #[error("Label error: {0}")]
    Label(String),

    /// A configuration value is outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand for results produced by pipeline stages.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_message_mentions_drop() {
        let err = PipelineError::EmptyDataset { dropped: 7 };
        let msg = err.to_string();
        assert!(msg.contains("empty"));
        assert!(msg.contains("7 row(s)"));
    }

    #[test]
    fn test_row_mismatch_message() {
        let err = PipelineError::RowMismatch {
            features: 10,
            targets: 9,
        };
        assert_eq!(
            err.to_string(),
            "Row count mismatch: feature matrix has 10 row(s), target has 9"
        );
    }
}
