//! Classification losses: gradients, base scores and output transforms.
//!
//! Scores, gradients and hessians are laid out column-major by output:
//! the value for output `k` of row `i` lives at `k * n_rows + i`.

/// Floor for hessians so leaf weights stay finite
const HESS_MIN: f64 = 1e-6;

/// Clamp for class priors before taking logs
const PRIOR_EPS: f64 = 1e-7;

#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Softmax of one row of raw scores, computed with the max-shift trick
pub fn softmax(raw: &[f64]) -> Vec<f64> {
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = raw.iter().map(|&s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Loss used to fit the ensemble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Binary log loss on a single log-odds output
    Logistic,
    /// Softmax cross-entropy with one output per class
    Softmax { n_classes: usize },
}

impl Objective {
    /// Logistic for two classes, softmax otherwise
    pub fn for_classes(n_classes: usize) -> Self {
        if n_classes <= 2 {
            Objective::Logistic
        } else {
            Objective::Softmax { n_classes }
        }
    }

    /// Raw scores (and trees) per row
    pub fn n_outputs(&self) -> usize {
        match self {
            Objective::Logistic => 1,
            Objective::Softmax { n_classes } => *n_classes,
        }
    }

    /// Initial raw score per output, from class priors
    pub fn base_scores(&self, labels: &[usize]) -> Vec<f64> {
        let n = labels.len().max(1) as f64;
        match self {
            Objective::Logistic => {
                let positives = labels.iter().filter(|&&l| l == 1).count() as f64;
                let p = (positives / n).clamp(PRIOR_EPS, 1.0 - PRIOR_EPS);
                vec![(p / (1.0 - p)).ln()]
            }
            Objective::Softmax { n_classes } => {
                let mut counts = vec![0.0f64; *n_classes];
                for &l in labels {
                    if l < *n_classes {
                        counts[l] += 1.0;
                    }
                }
                counts
                    .into_iter()
                    .map(|c| (c / n).clamp(PRIOR_EPS, 1.0 - PRIOR_EPS).ln())
                    .collect()
            }
        }
    }

    /// Fill first and second derivatives of the loss w.r.t. the raw scores
    pub fn compute_gradients(
        &self,
        scores: &[f64],
        labels: &[usize],
        gradients: &mut [f64],
        hessians: &mut [f64],
    ) {
        let n_rows = labels.len();
        debug_assert_eq!(scores.len(), n_rows * self.n_outputs());
        debug_assert_eq!(gradients.len(), scores.len());
        debug_assert_eq!(hessians.len(), scores.len());

        match self {
            Objective::Logistic => {
                for (i, &label) in labels.iter().enumerate() {
                    let p = sigmoid(scores[i]);
                    let y = if label == 1 { 1.0 } else { 0.0 };
                    gradients[i] = p - y;
                    hessians[i] = (p * (1.0 - p)).max(HESS_MIN);
                }
            }
            Objective::Softmax { n_classes } => {
                let k = *n_classes;
                let mut row = vec![0.0; k];
                for (i, &label) in labels.iter().enumerate() {
                    for (c, slot) in row.iter_mut().enumerate() {
                        *slot = scores[c * n_rows + i];
                    }
                    let probs = softmax(&row);
                    for (c, &p) in probs.iter().enumerate() {
                        let y = if c == label { 1.0 } else { 0.0 };
                        gradients[c * n_rows + i] = p - y;
                        hessians[c * n_rows + i] = (p * (1.0 - p)).max(HESS_MIN);
                    }
                }
            }
        }
    }

    /// Class probabilities for one row of raw scores
    pub fn probabilities(&self, raw: &[f64]) -> Vec<f64> {
        match self {
            Objective::Logistic => {
                let p = sigmoid(raw[0]);
                vec![1.0 - p, p]
            }
            Objective::Softmax { .. } => softmax(raw),
        }
    }

    /// Predicted class index for one row of raw scores
    pub fn predict_class(&self, raw: &[f64]) -> usize {
        match self {
            Objective::Logistic => usize::from(raw[0] > 0.0),
            Objective::Softmax { .. } => raw
                .iter()
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |(best, best_v), (c, &v)| {
                    if v > best_v {
                        (c, v)
                    } else {
                        (best, best_v)
                    }
                })
                .0,
        }
    }
}
