//! Seeded train/evaluation split

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use super::error::{PipelineError, Result};
use super::matrix::FeatureMatrix;
use super::target::TargetVector;

/// Aligned training and evaluation subsets
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: FeatureMatrix,
    pub x_test: FeatureMatrix,
    pub y_train: TargetVector,
    pub y_test: TargetVector,
}

/// Number of evaluation rows for `n_rows` at `test_fraction`
pub fn test_size(n_rows: usize, test_fraction: f64) -> usize {
    (test_fraction * n_rows as f64).round() as usize
}

/// Shuffle rows with a seeded RNG and split them into training and evaluation sets.
///
/// The first `round(test_fraction * n_rows)` shuffled rows form the
/// evaluation set. The same seed always produces the same split.
///
/// # Errors
/// * `RowMismatch` - `x` and `y` have different row counts
/// * `InvalidConfig` - the fraction is outside (0, 1) or a side would be empty
pub fn train_test_split(
    x: &FeatureMatrix,
    y: &TargetVector,
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    if x.nrows() != y.len() {
        return Err(PipelineError::RowMismatch {
            features: x.nrows(),
            targets: y.len(),
        });
    }

    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(PipelineError::InvalidConfig(format!(
            "test fraction must be between 0 and 1 (exclusive), got {}",
            test_fraction
        )));
    }

    let n_rows = x.nrows();
    let n_test = test_size(n_rows, test_fraction);
    if n_test == 0 || n_test >= n_rows {
        return Err(PipelineError::InvalidConfig(format!(
            "cannot split {} row(s) with test fraction {}: one side would be empty",
            n_rows, test_fraction
        )));
    }

    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);
    debug!(seed, n_train = train_idx.len(), n_test, "Partitioned rows");

    Ok(TrainTestSplit {
        x_train: x.select_rows(train_idx),
        x_test: x.select_rows(test_idx),
        y_train: y.select(train_idx),
        y_test: y.select(test_idx),
    })
}
