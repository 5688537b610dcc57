//! Feature/target separation

use polars::prelude::*;

use super::error::{PipelineError, Result};

/// Separate a dataset into its feature table and target column.
///
/// The feature table keeps the original column order minus the target.
pub fn split_features_target(df: &DataFrame, target_column: &str) -> Result<(DataFrame, Column)> {
    let target = df
        .column(target_column)
        .map_err(|_| {
            PipelineError::Schema(format!("Target column '{}' not found", target_column))
        })?
        .clone();

    let features = df.drop(target_column)?;
    if features.width() == 0 {
        return Err(PipelineError::Schema(format!(
            "Dataset has no feature columns besides target '{}'",
            target_column
        )));
    }

    Ok((features, target))
}
