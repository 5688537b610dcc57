//! Missing value imputation

use std::collections::HashMap;

/// Fills missing numeric values with the mean of the fitted values
#[derive(Debug, Clone, PartialEq)]
pub struct MeanImputer {
    mean: f64,
}

impl MeanImputer {
    /// Learn the mean of the observed values.
    ///
    /// Returns `None` when nothing is observed, since no fill value exists.
    pub fn fit(values: &[Option<f64>]) -> Option<Self> {
        let (sum, count) = values
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(s, c), &v| (s + v, c + 1));

        if count == 0 {
            return None;
        }

        Some(Self {
            mean: sum / count as f64,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn transform(&self, values: &[Option<f64>]) -> Vec<f64> {
        values.iter().map(|v| v.unwrap_or(self.mean)).collect()
    }
}

/// Fills missing categorical values with the most frequent fitted value.
///
/// Ties go to the value that sorts first.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeImputer {
    mode: String,
}

impl ModeImputer {
    /// Learn the most frequent observed value, or `None` if all are missing
    pub fn fit(values: &[Option<String>]) -> Option<Self> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for v in values.iter().flatten() {
            *counts.entry(v.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .max_by(|(a_val, a_cnt), (b_val, b_cnt)| a_cnt.cmp(b_cnt).then_with(|| b_val.cmp(a_val)))
            .map(|(mode, _)| Self {
                mode: mode.to_string(),
            })
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn transform(&self, values: &[Option<String>]) -> Vec<String> {
        values
            .iter()
            .map(|v| v.clone().unwrap_or_else(|| self.mode.clone()))
            .collect()
    }
}
