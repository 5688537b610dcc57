//! Boosting hyperparameters

use serde::{Deserialize, Serialize};

use crate::pipeline::error::{PipelineError, Result};

/// Fixed-configuration parameters for gradient-boosted tree training.
///
/// Defaults follow the usual gradient-boosting library defaults:
/// 100 rounds, learning rate 0.3, depth 6, L2 regularization 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostingConfig {
    /// Boosting rounds (trees per class output)
    pub n_estimators: usize,
    /// Shrinkage applied to every leaf value
    pub learning_rate: f64,
    /// Maximum tree depth
    pub max_depth: usize,
    /// L2 regularization on leaf weights (lambda)
    pub reg_lambda: f64,
    /// Minimum hessian sum required in each child
    pub min_child_weight: f64,
    /// Minimum gain required to split (gamma)
    pub gamma: f64,
    /// Draw a progress bar over boosting rounds
    pub show_progress: bool,
}

impl Default for BoostingConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            learning_rate: 0.3,
            max_depth: 6,
            reg_lambda: 1.0,
            min_child_weight: 1.0,
            gamma: 0.0,
            show_progress: true,
        }
    }
}

impl BoostingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_estimators == 0 {
            return Err(PipelineError::InvalidConfig(
                "n_estimators must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate > 0.0) {
            return Err(PipelineError::InvalidConfig(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.max_depth == 0 {
            return Err(PipelineError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.reg_lambda < 0.0 || self.min_child_weight < 0.0 || self.gamma < 0.0 {
            return Err(PipelineError::InvalidConfig(
                "reg_lambda, min_child_weight and gamma must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
