//! One-hot encoding of categorical columns

/// Expands a categorical column into one indicator per fitted category.
///
/// Categories are kept sorted. A value that was not seen during `fit`
/// encodes to all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotEncoder {
    categories: Vec<String>,
}

impl OneHotEncoder {
    pub fn fit(values: &[String]) -> Self {
        let mut categories: Vec<String> = values.to_vec();
        categories.sort();
        categories.dedup();
        Self { categories }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of indicator columns produced
    pub fn n_outputs(&self) -> usize {
        self.categories.len()
    }

    /// Index of the indicator set to 1 for `value`, if the category is known
    pub fn category_index(&self, value: &str) -> Option<usize> {
        self.categories
            .binary_search_by(|c| c.as_str().cmp(value))
            .ok()
    }

    /// Indicator row for a single value
    pub fn encode(&self, value: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.n_outputs()];
        if let Some(idx) = self.category_index(value) {
            row[idx] = 1.0;
        }
        row
    }

    /// Output column names, `<column>_<category>`
    pub fn feature_names(&self, column: &str) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("{}_{}", column, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_categories_sorted_and_unique() {
        let encoder = OneHotEncoder::fit(&strings(&["red", "blue", "red", "green"]));
        assert_eq!(encoder.categories(), &["blue", "green", "red"]);
        assert_eq!(encoder.n_outputs(), 3);
    }

    #[test]
    fn test_each_row_sums_to_one() {
        let values = strings(&["b", "a", "c", "a", "b"]);
        let encoder = OneHotEncoder::fit(&values);
        for v in &values {
            let row = encoder.encode(v);
            assert_eq!(row.iter().sum::<f64>(), 1.0);
        }
    }

    #[test]
    fn test_unknown_category_is_all_zero() {
        let encoder = OneHotEncoder::fit(&strings(&["a", "b"]));
        assert_eq!(encoder.encode("z"), vec![0.0, 0.0]);
        assert_eq!(encoder.category_index("z"), None);
    }

    #[test]
    fn test_feature_names() {
        let encoder = OneHotEncoder::fit(&strings(&["x", "y"]));
        assert_eq!(encoder.feature_names("col"), vec!["col_x", "col_y"]);
    }
}
