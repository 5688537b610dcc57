//! Column-wise preprocessing into a single numeric feature matrix
//!
//! Numeric columns go through mean imputation then standardization;
//! categorical columns go through mode imputation then one-hot encoding.
//! Outputs are laid out numeric columns first, then the indicator blocks of
//! the categorical columns, each group in frame order.

use faer::Mat;
use polars::prelude::*;
use tracing::debug;

use super::columns::{column_to_f64_vec, column_to_string_vec};
use super::config::ColumnKind;
use super::encode::OneHotEncoder;
use super::error::{PipelineError, Result};
use super::impute::{MeanImputer, ModeImputer};
use super::matrix::FeatureMatrix;
use super::scale::StandardScaler;

#[derive(Debug, Clone)]
enum FittedColumn {
    Numeric {
        name: String,
        imputer: MeanImputer,
        scaler: StandardScaler,
    },
    Categorical {
        name: String,
        imputer: ModeImputer,
        encoder: OneHotEncoder,
    },
}

impl FittedColumn {
    fn name(&self) -> &str {
        match self {
            FittedColumn::Numeric { name, .. } | FittedColumn::Categorical { name, .. } => name,
        }
    }

    fn n_outputs(&self) -> usize {
        match self {
            FittedColumn::Numeric { .. } => 1,
            FittedColumn::Categorical { encoder, .. } => encoder.n_outputs(),
        }
    }

    fn feature_names(&self) -> Vec<String> {
        match self {
            FittedColumn::Numeric { name, .. } => vec![name.clone()],
            FittedColumn::Categorical { name, encoder, .. } => encoder.feature_names(name),
        }
    }
}

/// Preprocessing fitted on one feature table and reusable on others
#[derive(Debug, Clone)]
pub struct Preprocessor {
    columns: Vec<FittedColumn>,
}

impl Preprocessor {
    /// Learn imputation, scaling and encoding statistics from `features`.
    ///
    /// `kinds` lists the columns to process; columns of `features` not
    /// listed are ignored.
    pub fn fit(features: &DataFrame, kinds: &[(String, ColumnKind)]) -> Result<Self> {
        let mut numeric = Vec::new();
        let mut categorical = Vec::new();

        for (name, kind) in kinds {
            let col = fetch_column(features, name)?;
            match kind {
                ColumnKind::Numeric => {
                    let values = column_to_f64_vec(col)?;
                    let imputer = MeanImputer::fit(&values).ok_or_else(|| {
                        PipelineError::Schema(format!("Numeric column '{}' has no values", name))
                    })?;
                    let scaler = StandardScaler::fit(&imputer.transform(&values));
                    debug!(column = %name, mean = imputer.mean(), scale = scaler.scale(), "Fitted numeric column");
                    numeric.push(FittedColumn::Numeric {
                        name: name.clone(),
                        imputer,
                        scaler,
                    });
                }
                ColumnKind::Categorical => {
                    let values = column_to_string_vec(col)?;
                    let imputer = ModeImputer::fit(&values).ok_or_else(|| {
                        PipelineError::Schema(format!(
                            "Categorical column '{}' has no values",
                            name
                        ))
                    })?;
                    let encoder = OneHotEncoder::fit(&imputer.transform(&values));
                    debug!(column = %name, categories = encoder.n_outputs(), "Fitted categorical column");
                    categorical.push(FittedColumn::Categorical {
                        name: name.clone(),
                        imputer,
                        encoder,
                    });
                }
            }
        }

        numeric.extend(categorical);
        Ok(Self { columns: numeric })
    }

    /// Apply the fitted statistics to `features`
    pub fn transform(&self, features: &DataFrame) -> Result<FeatureMatrix> {
        let n_rows = features.height();
        let mut data = Mat::<f64>::zeros(n_rows, self.n_output_features());

        let mut offset = 0;
        for fitted in &self.columns {
            let col = fetch_column(features, fitted.name())?;
            match fitted {
                FittedColumn::Numeric {
                    imputer, scaler, ..
                } => {
                    let values = imputer.transform(&column_to_f64_vec(col)?);
                    for (i, v) in values.into_iter().enumerate() {
                        data[(i, offset)] = scaler.transform_value(v);
                    }
                }
                FittedColumn::Categorical {
                    imputer, encoder, ..
                } => {
                    let values = imputer.transform(&column_to_string_vec(col)?);
                    for (i, v) in values.iter().enumerate() {
                        if let Some(idx) = encoder.category_index(v) {
                            data[(i, offset + idx)] = 1.0;
                        }
                    }
                }
            }
            offset += fitted.n_outputs();
        }

        Ok(FeatureMatrix::new(data, self.feature_names()))
    }

    pub fn fit_transform(
        features: &DataFrame,
        kinds: &[(String, ColumnKind)],
    ) -> Result<(Self, FeatureMatrix)> {
        let preprocessor = Self::fit(features, kinds)?;
        let matrix = preprocessor.transform(features)?;
        Ok((preprocessor, matrix))
    }

    /// Total output columns: one per numeric column plus one per category
    pub fn n_output_features(&self) -> usize {
        self.columns.iter().map(|c| c.n_outputs()).sum()
    }

    pub fn feature_names(&self) -> Vec<String> {
        self.columns.iter().flat_map(|c| c.feature_names()).collect()
    }

    pub fn n_numeric(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| matches!(c, FittedColumn::Numeric { .. }))
            .count()
    }

    pub fn n_categorical(&self) -> usize {
        self.columns.len() - self.n_numeric()
    }
}

fn fetch_column<'a>(features: &'a DataFrame, name: &str) -> Result<&'a Column> {
    features.column(name).map_err(|_| {
        PipelineError::Schema(format!("Feature column '{}' not found", name))
    })
}
