//! Pipeline configuration and explicit column schema

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{PipelineError, Result};
use crate::boosting::BoostingConfig;

/// Fraction of rows held out for evaluation
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u64 = 42;

/// How a feature column is preprocessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Mean-imputed, then standardized
    Numeric,
    /// Mode-imputed, then one-hot encoded
    Categorical,
}

/// User-declared column kinds.
///
/// Read from a JSON object such as `{"age": "numeric", "zip": "categorical"}`.
/// Columns not listed fall back to storage-type inference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: BTreeMap<String, ColumnKind>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the kind of a single column
    pub fn with_column(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.columns.insert(name.into(), kind);
        self
    }

    pub fn get(&self, name: &str) -> Option<ColumnKind> {
        self.columns.get(name).copied()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Load a schema from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PipelineError::File {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| {
            PipelineError::Schema(format!(
                "Invalid schema file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Everything one pipeline run needs, built once and passed by reference
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub file_path: PathBuf,
    pub target_column: String,
    /// Seed for the train/evaluation shuffle
    pub seed: u64,
    /// Fraction of rows held out for evaluation
    pub test_fraction: f64,
    pub schema: Option<Schema>,
    pub boosting: BoostingConfig,
}

impl PipelineConfig {
    pub fn new(file_path: impl Into<PathBuf>, target_column: impl Into<String>, seed: u64) -> Self {
        Self {
            file_path: file_path.into(),
            target_column: target_column.into(),
            seed,
            test_fraction: DEFAULT_TEST_FRACTION,
            schema: None,
            boosting: BoostingConfig::default(),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Check ranges before any stage runs
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(PipelineError::InvalidConfig(format!(
                "test fraction must be between 0 and 1 (exclusive), got {}",
                self.test_fraction
            )));
        }
        if self.target_column.is_empty() {
            return Err(PipelineError::InvalidConfig(
                "target column name must not be empty".to_string(),
            ));
        }
        self.boosting.validate()
    }
}
