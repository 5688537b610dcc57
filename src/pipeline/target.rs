//! Target column imputation and label encoding
//!
//! The target is always treated as categorical: values are read as strings,
//! missing labels take the most frequent label, and each distinct label is
//! mapped to a class index in sorted order.

use std::cmp::Ordering;

use polars::prelude::*;
use tracing::warn;

use super::columns::column_to_string_vec;
use super::error::{PipelineError, Result};
use super::impute::ModeImputer;

/// Class indices aligned with feature matrix rows
#[derive(Debug, Clone, PartialEq)]
pub struct TargetVector {
    labels: Vec<usize>,
    classes: Vec<String>,
}

impl TargetVector {
    /// Build from class indices and the label names they point into.
    ///
    /// Every index must be smaller than `classes.len()`.
    pub fn new(labels: Vec<usize>, classes: Vec<String>) -> Result<Self> {
        if let Some(&bad) = labels.iter().find(|&&l| l >= classes.len()) {
            return Err(PipelineError::Label(format!(
                "class index {} out of range for {} classes",
                bad,
                classes.len()
            )));
        }
        Ok(Self { labels, classes })
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label name for a class index
    pub fn class_name(&self, class: usize) -> Option<&str> {
        self.classes.get(class).map(|s| s.as_str())
    }

    /// New vector holding the given rows, keeping the full class list
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
            classes: self.classes.clone(),
        }
    }
}

/// Numeric labels first in numeric order, then the rest lexically.
///
/// Numeric ties ("1" vs "1.0") fall back to the text so equal strings stay adjacent.
fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Mode-impute the target column and map its labels to class indices.
///
/// # Errors
/// * `Label` - the column is empty, entirely missing, or has a single class
pub fn encode_target(col: &Column) -> Result<TargetVector> {
    let name = col.name().to_string();

    if col.len() == 0 {
        return Err(PipelineError::Label(format!(
            "Target column '{}' is empty",
            name
        )));
    }

    let values = column_to_string_vec(col)?;
    let imputer = ModeImputer::fit(&values).ok_or_else(|| {
        PipelineError::Label(format!(
            "Target column '{}' contains only null values",
            name
        ))
    })?;
    let imputed = imputer.transform(&values);

    let mut classes = imputed.clone();
    classes.sort_by(|a, b| compare_labels(a, b));
    classes.dedup();

    if classes.len() < 2 {
        return Err(PipelineError::Label(format!(
            "Target column '{}' has a single class ({}); at least two are required",
            name,
            classes.join(", ")
        )));
    }

    if classes.len() * 2 > imputed.len() {
        warn!(
            "Target column '{}' has {} distinct values over {} rows; it may be continuous rather than categorical",
            name,
            classes.len(),
            imputed.len()
        );
    }

    let labels = imputed
        .iter()
        .map(|v| {
            classes
                .iter()
                .position(|c| c == v)
                .ok_or_else(|| PipelineError::Label(format!("Unmapped target value '{}'", v)))
        })
        .collect::<Result<Vec<usize>>>()?;

    TargetVector::new(labels, classes)
}
