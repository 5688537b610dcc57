//! Dense numeric feature matrix produced by preprocessing

use faer::Mat;

/// Processed features: one row per observation, one column per output feature
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    data: Mat<f64>,
    names: Vec<String>,
}

impl FeatureMatrix {
    /// Wrap a matrix whose column count matches `names`
    pub fn new(data: Mat<f64>, names: Vec<String>) -> Self {
        debug_assert_eq!(data.ncols(), names.len());
        Self { data, names }
    }

    /// Build from row-major values
    pub fn from_rows(rows: &[Vec<f64>], names: Vec<String>) -> Self {
        let ncols = names.len();
        let data = Mat::from_fn(rows.len(), ncols, |i, j| rows[i][j]);
        Self { data, names }
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    pub fn row(&self, row: usize) -> Vec<f64> {
        (0..self.ncols()).map(|j| self.data[(row, j)]).collect()
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.nrows()).map(|i| self.data[(i, col)]).collect()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn as_mat(&self) -> &Mat<f64> {
        &self.data
    }

    /// New matrix holding the given rows in the given order
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let data = Mat::from_fn(indices.len(), self.ncols(), |i, j| {
            self.data[(indices[i], j)]
        });
        Self {
            data,
            names: self.names.clone(),
        }
    }
}

impl PartialEq for FeatureMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
            && self.nrows() == other.nrows()
            && (0..self.nrows())
                .all(|i| (0..self.ncols()).all(|j| self.get(i, j) == other.get(i, j)))
    }
}
