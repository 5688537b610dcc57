//! Standardization of numeric columns

/// Rescales a column to zero mean and unit variance.
///
/// Uses the population standard deviation. A constant column keeps a scale
/// of 1.0, so it transforms to all zeros instead of dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: f64,
    scale: f64,
}

impl StandardScaler {
    pub fn fit(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                scale: 1.0,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        Self {
            mean,
            scale: if std > f64::EPSILON { std } else { 1.0 },
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn transform_value(&self, value: f64) -> f64 {
        (value - self.mean) / self.scale
    }

    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.transform_value(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardized_output_moments() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let scaler = StandardScaler::fit(&values);
        assert!((scaler.mean() - 5.0).abs() < 1e-12);
        assert!((scaler.scale() - 2.0).abs() < 1e-12);

        let scaled = scaler.transform(&values);
        let mean = scaled.iter().sum::<f64>() / scaled.len() as f64;
        let var = scaled.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / scaled.len() as f64;
        assert!(mean.abs() < 1e-12);
        assert!((var - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_scales_to_zero() {
        let scaler = StandardScaler::fit(&[3.0, 3.0, 3.0]);
        assert_eq!(scaler.scale(), 1.0);
        assert_eq!(scaler.transform(&[3.0, 3.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_transform_uses_fitted_statistics() {
        let scaler = StandardScaler::fit(&[0.0, 2.0]);
        // mean 1, std 1
        assert_eq!(scaler.transform(&[5.0]), vec![4.0]);
    }
}
