//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a classification DataFrame with known characteristics
///
/// This DataFrame includes:
/// - `age`, `income`, `score`: numeric features
/// - `segment`: categorical feature with two categories ("retail", "business")
/// - `churn`: binary target (0/1), driven mostly by `score` and `segment`
pub fn create_mixed_dataframe(rows: usize, seed: u64) -> DataFrame {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut age = Vec::with_capacity(rows);
    let mut income = Vec::with_capacity(rows);
    let mut score = Vec::with_capacity(rows);
    let mut segment = Vec::with_capacity(rows);
    let mut churn = Vec::with_capacity(rows);

    for _ in 0..rows {
        let s: f64 = rng.gen_range(0.0..10.0);
        let business = rng.gen_bool(0.5);
        age.push(rng.gen_range(18i64..80));
        income.push(rng.gen_range(20.0..120.0f64));
        score.push(s);
        segment.push(if business { "business" } else { "retail" });
        churn.push(i32::from(s > 5.0 || (business && s > 4.0)));
    }

    df! {
        "age" => age,
        "income" => income,
        "score" => score,
        "segment" => segment,
        "churn" => churn,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Write raw CSV lines to a temporary file
pub fn write_csv_lines(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("raw.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    drop(file);

    (temp_dir, csv_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}
