//! Dataset loader for CSV files

use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

use super::error::{PipelineError, Result};

/// Field values read as missing in addition to empty fields
pub const NULL_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A dataset after the missing-row drop
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub df: DataFrame,
    /// Rows present in the file
    pub rows_read: usize,
    /// Rows removed because at least one field was missing
    pub rows_dropped: usize,
}

impl LoadedDataset {
    pub fn height(&self) -> usize {
        self.df.height()
    }
}

fn file_error(path: &Path, message: impl ToString) -> PipelineError {
    PipelineError::File {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn csv_reader(path: &Path) -> Result<LazyFrame> {
    if !path.exists() {
        return Err(file_error(path, "file does not exist"));
    }
    if !path.is_file() {
        return Err(file_error(path, "path is not a file"));
    }

    let null_values = NullValues::AllColumns(NULL_TOKENS.iter().map(|s| (*s).into()).collect());

    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_null_values(Some(null_values))
        .finish()
        .map_err(|e| file_error(path, e))
}

/// Read a CSV file into memory without dropping anything
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = csv_reader(path)?
        .collect()
        .map_err(|e| file_error(path, e))?;
    debug!(rows = df.height(), cols = df.width(), "CSV parsed");
    Ok(df)
}

/// Get column names from the CSV header without loading the data
pub fn get_column_names(path: &Path) -> Result<Vec<String>> {
    let schema = csv_reader(path)?
        .collect_schema()
        .map_err(|e| file_error(path, e))?;
    Ok(schema.iter_names().map(|s| s.to_string()).collect())
}

/// Drop every row that has at least one missing field
pub fn drop_missing_rows(df: &DataFrame) -> Result<DataFrame> {
    Ok(df.drop_nulls::<String>(None)?)
}

/// Load a dataset, verify the target column and drop incomplete rows.
///
/// # Errors
/// * `File` - the path does not exist or is not parseable CSV
/// * `Schema` - the target column is not in the header
/// * `EmptyDataset` - every row had at least one missing field
pub fn load_dataset(path: &Path, target_column: &str) -> Result<LoadedDataset> {
    let raw = read_csv(path)?;
    let rows_read = raw.height();

    let column_names: Vec<String> = raw
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    if !column_names.iter().any(|c| c == target_column) {
        return Err(PipelineError::Schema(format!(
            "Target column '{}' not found in dataset. Available columns: {:?}",
            target_column, column_names
        )));
    }

    let df = drop_missing_rows(&raw)?;
    let rows_dropped = rows_read - df.height();

    if df.height() == 0 {
        return Err(PipelineError::EmptyDataset {
            dropped: rows_dropped,
        });
    }

    if rows_dropped > 0 {
        info!(rows_read, rows_dropped, "Dropped rows with missing values");
    }
    if rows_dropped * 2 > rows_read {
        warn!(
            "More than half of the dataset was dropped for missing values ({} of {} rows)",
            rows_dropped, rows_read
        );
    }

    Ok(LoadedDataset {
        df,
        rows_read,
        rows_dropped,
    })
}
