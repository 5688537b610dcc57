//! Column kind resolution and value extraction from polars columns

use polars::prelude::*;
use tracing::debug;

use super::config::{ColumnKind, Schema};
use super::error::{PipelineError, Result};

/// Kind a column gets from its storage type alone.
///
/// Primitive numeric dtypes are numeric; strings, booleans and everything
/// else are categorical. An integer-coded category is therefore numeric
/// unless a schema says otherwise.
pub fn infer_column_kind(dtype: &DataType) -> ColumnKind {
    if dtype.is_primitive_numeric() {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Decide the kind of every feature column, in frame order.
///
/// Explicit schema entries win over storage-type inference. A schema entry
/// naming a column that is not in `features` is an error, as is a column
/// declared numeric whose values cannot be read as numbers.
pub fn resolve_column_kinds(
    features: &DataFrame,
    schema: Option<&Schema>,
) -> Result<Vec<(String, ColumnKind)>> {
    if let Some(schema) = schema {
        for name in schema.column_names() {
            if features.column(name).is_err() {
                return Err(PipelineError::Schema(format!(
                    "Schema declares column '{}' which is not a feature column",
                    name
                )));
            }
        }
    }

    let mut kinds = Vec::with_capacity(features.width());
    for col in features.get_columns() {
        let name = col.name().to_string();
        let kind = match schema.and_then(|s| s.get(&name)) {
            Some(kind) => {
                if kind == ColumnKind::Numeric {
                    // Fails early for declared-numeric text columns
                    column_to_f64_vec(col)?;
                }
                kind
            }
            None => infer_column_kind(col.dtype()),
        };
        debug!(column = %name, ?kind, dtype = %col.dtype(), "Resolved column kind");
        kinds.push((name, kind));
    }

    Ok(kinds)
}

/// Read a column as optional floats.
///
/// Any value that is present but does not convert to a number is an error.
pub fn column_to_f64_vec(col: &Column) -> Result<Vec<Option<f64>>> {
    let cast = col.cast(&DataType::Float64).map_err(|_| {
        PipelineError::Schema(format!("Column '{}' cannot be read as numeric", col.name()))
    })?;

    if cast.null_count() > col.null_count() {
        return Err(PipelineError::Schema(format!(
            "Column '{}' contains values that are not numeric",
            col.name()
        )));
    }

    Ok(cast.f64()?.into_iter().collect())
}

/// Read a column as optional strings, whatever its dtype
pub fn column_to_string_vec(col: &Column) -> Result<Vec<Option<String>>> {
    let values: Vec<Option<String>> = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
            let cast = col.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let cast = col.cast(&DataType::UInt64)?;
            cast.u64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let cast = col.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .map(|v| v.map(|n| format!("{}", n)))
                .collect()
        }
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        _ => {
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}
