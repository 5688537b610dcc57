//! Run summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Number of features listed in the importance section
const TOP_FEATURES: usize = 5;

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub numeric_columns: usize,
    pub categorical_columns: usize,
    pub processed_features: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub classes: Vec<String>,
    pub trees: usize,
    /// (feature name, total split gain), highest first
    pub feature_importances: Vec<(String, f64)>,
    pub accuracy: f64,
}

impl RunSummary {
    /// Pair feature names with gains and sort by gain descending
    pub fn set_feature_importances(&mut self, names: &[String], gains: &[f64]) {
        let mut pairs: Vec<(String, f64)> = names
            .iter()
            .cloned()
            .zip(gains.iter().copied())
            .collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        self.feature_importances = pairs;
    }

    /// Render the summary table as text
    pub fn render_table(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("Rows Read"), Cell::new(self.rows_read)]);
        table.add_row(vec![
            Cell::new("Rows Dropped (Missing)"),
            Cell::new(self.rows_dropped).fg(if self.rows_dropped == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        table.add_row(vec![
            Cell::new("Numeric Columns"),
            Cell::new(self.numeric_columns),
        ]);
        table.add_row(vec![
            Cell::new("Categorical Columns"),
            Cell::new(self.categorical_columns),
        ]);
        table.add_row(vec![
            Cell::new("Processed Features"),
            Cell::new(self.processed_features),
        ]);
        table.add_row(vec![
            Cell::new("Train / Eval Rows"),
            Cell::new(format!("{} / {}", self.train_rows, self.test_rows)),
        ]);
        table.add_row(vec![
            Cell::new("Classes"),
            Cell::new(self.classes.join(", ")),
        ]);
        table.add_row(vec![Cell::new("Trees"), Cell::new(self.trees)]);

        let color = if self.accuracy >= 0.8 {
            Color::Green
        } else if self.accuracy >= 0.5 {
            Color::Yellow
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new("Accuracy"),
            Cell::new(format!("{:.4}", self.accuracy))
                .fg(color)
                .add_attribute(Attribute::Bold),
        ]);

        table.to_string()
    }

    /// Print the summary to stderr, leaving stdout for the metric
    pub fn display(&self) {
        eprintln!();
        eprintln!("    {}", style("RUN SUMMARY").white().bold());
        eprintln!("    {}", style("─".repeat(50)).dim());
        eprintln!();

        for line in self.render_table().lines() {
            eprintln!("    {}", line);
        }

        let top: Vec<&(String, f64)> = self
            .feature_importances
            .iter()
            .filter(|(_, gain)| *gain > 0.0)
            .take(TOP_FEATURES)
            .collect();

        if !top.is_empty() {
            eprintln!();
            eprintln!("    {}", style("TOP FEATURES BY GAIN").white().bold());
            eprintln!("    {}", style("─".repeat(50)).dim());
            for (name, gain) in top {
                eprintln!(
                    "      {} {:<32} {}",
                    style("•").dim(),
                    name,
                    style(format!("{:.3}", gain)).yellow()
                );
            }
        }
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importances_sorted_descending() {
        let mut summary = RunSummary::default();
        summary.set_feature_importances(
            &["a".to_string(), "b".to_string(), "c".to_string()],
            &[0.5, 2.0, 1.0],
        );
        let names: Vec<&str> = summary
            .feature_importances
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_table_contains_accuracy() {
        let summary = RunSummary {
            rows_read: 100,
            train_rows: 80,
            test_rows: 20,
            classes: vec!["0".to_string(), "1".to_string()],
            accuracy: 0.85,
            ..Default::default()
        };
        let table = summary.render_table();
        assert!(table.contains("0.8500"));
        assert!(table.contains("80 / 20"));
        assert!(table.contains("0, 1"));
    }
}
