//! Evaluation metrics

use super::error::{PipelineError, Result};

/// Fraction of predictions equal to the true label
pub fn accuracy_score(truth: &[usize], predicted: &[usize]) -> Result<f64> {
    if truth.len() != predicted.len() {
        return Err(PipelineError::RowMismatch {
            features: predicted.len(),
            targets: truth.len(),
        });
    }
    if truth.is_empty() {
        return Err(PipelineError::EmptyDataset { dropped: 0 });
    }

    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| t == p)
        .count();

    Ok(correct as f64 / truth.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_partial() {
        let acc = accuracy_score(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap();
        assert!((acc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_bounds() {
        assert_eq!(accuracy_score(&[2, 2], &[2, 2]).unwrap(), 1.0);
        assert_eq!(accuracy_score(&[0, 1], &[1, 0]).unwrap(), 0.0);
    }

    #[test]
    fn test_accuracy_length_mismatch() {
        assert!(matches!(
            accuracy_score(&[0, 1], &[0]),
            Err(PipelineError::RowMismatch { .. })
        ));
    }

    #[test]
    fn test_accuracy_empty() {
        assert!(accuracy_score(&[], &[]).is_err());
    }
}
