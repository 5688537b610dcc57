//! Gradient-boosted tree classifier

use std::time::Instant;

use tracing::{debug, info};

use super::config::BoostingConfig;
use super::objective::Objective;
use super::tree::{RegressionTree, TreeParams};
use crate::pipeline::error::{PipelineError, Result};
use crate::pipeline::{FeatureMatrix, TargetVector};
use crate::utils::create_progress_bar;

/// Ensemble of regression trees fitted by gradient boosting.
///
/// Holds only the trees and base scores; nothing from the training data.
#[derive(Debug, Clone)]
pub struct GradientBoostedClassifier {
    objective: Objective,
    n_classes: usize,
    n_features: usize,
    base_scores: Vec<f64>,
    /// One entry per boosting round, one tree per output within it
    rounds: Vec<Vec<RegressionTree>>,
}

impl GradientBoostedClassifier {
    /// Fit an ensemble on `x` and `y`.
    ///
    /// # Errors
    /// * `RowMismatch` - `x` and `y` disagree on row count
    /// * `Label` - the training set is empty or has fewer than two classes
    /// * `InvalidConfig` - `config` fails validation
    pub fn fit(x: &FeatureMatrix, y: &TargetVector, config: &BoostingConfig) -> Result<Self> {
        config.validate()?;

        if x.nrows() != y.len() {
            return Err(PipelineError::RowMismatch {
                features: x.nrows(),
                targets: y.len(),
            });
        }
        if y.is_empty() {
            return Err(PipelineError::Label("training set is empty".to_string()));
        }
        let n_classes = y.n_classes();
        if n_classes < 2 {
            return Err(PipelineError::Label(format!(
                "need at least two classes to train a classifier, got {}",
                n_classes
            )));
        }

        let start = Instant::now();
        let objective = Objective::for_classes(n_classes);
        let n_outputs = objective.n_outputs();
        let n_rows = x.nrows();
        let labels = y.labels();

        let base_scores = objective.base_scores(labels);
        let mut scores: Vec<f64> = base_scores
            .iter()
            .flat_map(|&b| std::iter::repeat(b).take(n_rows))
            .collect();
        let mut gradients = vec![0.0; n_rows * n_outputs];
        let mut hessians = vec![0.0; n_rows * n_outputs];

        let params = TreeParams {
            max_depth: config.max_depth,
            learning_rate: config.learning_rate,
            reg_lambda: config.reg_lambda,
            min_child_weight: config.min_child_weight,
            gamma: config.gamma,
        };
        let all_rows: Vec<usize> = (0..n_rows).collect();

        let pb = config
            .show_progress
            .then(|| create_progress_bar(config.n_estimators as u64, "Boosting"));

        let mut rounds = Vec::with_capacity(config.n_estimators);
        for round in 0..config.n_estimators {
            objective.compute_gradients(&scores, labels, &mut gradients, &mut hessians);

            let mut trees = Vec::with_capacity(n_outputs);
            for k in 0..n_outputs {
                let range = k * n_rows..(k + 1) * n_rows;
                let tree = RegressionTree::fit(
                    x,
                    &gradients[range.clone()],
                    &hessians[range.clone()],
                    &all_rows,
                    &params,
                );
                for (i, s) in scores[range].iter_mut().enumerate() {
                    *s += tree.predict_row(x, i);
                }
                trees.push(tree);
            }

            if round % 10 == 0 {
                debug!(
                    round,
                    leaves = trees.iter().map(|t| t.n_leaves()).sum::<usize>(),
                    "Boosting round"
                );
            }
            rounds.push(trees);

            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }

        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }

        info!(
            rounds = rounds.len(),
            n_classes,
            n_rows,
            n_features = x.ncols(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Trained gradient-boosted classifier"
        );

        Ok(Self {
            objective,
            n_classes,
            n_features: x.ncols(),
            base_scores,
            rounds,
        })
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of boosting rounds
    pub fn n_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn n_trees(&self) -> usize {
        self.rounds.iter().map(|r| r.len()).sum()
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    fn check_width(&self, x: &FeatureMatrix) -> Result<()> {
        if x.ncols() != self.n_features {
            return Err(PipelineError::Schema(format!(
                "model was trained on {} feature(s), got {}",
                self.n_features,
                x.ncols()
            )));
        }
        Ok(())
    }

    fn raw_scores_row(&self, x: &FeatureMatrix, row: usize) -> Vec<f64> {
        let mut raw = self.base_scores.clone();
        for trees in &self.rounds {
            for (k, tree) in trees.iter().enumerate() {
                raw[k] += tree.predict_row(x, row);
            }
        }
        raw
    }

    /// Predicted class index per row
    pub fn predict(&self, x: &FeatureMatrix) -> Result<Vec<usize>> {
        self.check_width(x)?;
        Ok((0..x.nrows())
            .map(|i| self.objective.predict_class(&self.raw_scores_row(x, i)))
            .collect())
    }

    /// Class probabilities per row, one entry per class
    pub fn predict_proba(&self, x: &FeatureMatrix) -> Result<Vec<Vec<f64>>> {
        self.check_width(x)?;
        Ok((0..x.nrows())
            .map(|i| self.objective.probabilities(&self.raw_scores_row(x, i)))
            .collect())
    }

    /// Total split gain per feature across all trees
    pub fn feature_importances(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.n_features];
        for tree in self.rounds.iter().flatten() {
            for (t, g) in totals.iter_mut().zip(tree.feature_gains(self.n_features)) {
                *t += g;
            }
        }
        totals
    }
}
