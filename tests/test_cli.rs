//! Tests for CLI argument parsing and the binary's output contract

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use std::path::PathBuf;
use tabboost::cli::Cli;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_cli_short_flags() {
    let cli = Cli::parse_from(["tabboost", "-f", "data.csv", "-t", "label"]);

    assert_eq!(cli.file_path, PathBuf::from("data.csv"));
    assert_eq!(cli.target_column, "label");
    assert_eq!(cli.seed, 42, "Default seed should be 42");
    assert!(cli.schema.is_none());
    assert!(!cli.summary);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn test_cli_long_flags_use_underscores() {
    let cli = Cli::parse_from([
        "tabboost",
        "--file_path",
        "/data/train.csv",
        "--target_column",
        "Outcome",
    ]);

    assert_eq!(cli.file_path, PathBuf::from("/data/train.csv"));
    assert_eq!(cli.target_column, "Outcome");
}

#[test]
fn test_cli_requires_file_and_target() {
    assert!(Cli::try_parse_from(["tabboost", "-t", "label"]).is_err());
    assert!(Cli::try_parse_from(["tabboost", "-f", "data.csv"]).is_err());
}

#[test]
fn test_cli_seed_and_verbosity() {
    let cli = Cli::parse_from([
        "tabboost", "-f", "data.csv", "-t", "label", "--seed", "7", "-vv",
    ]);

    assert_eq!(cli.seed, 7);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_cli_to_config() {
    let cli = Cli::parse_from(["tabboost", "-f", "data.csv", "-t", "label", "-s", "9"]);

    let config = cli.to_config().unwrap();

    assert_eq!(config.file_path, PathBuf::from("data.csv"));
    assert_eq!(config.target_column, "label");
    assert_eq!(config.seed, 9);
    assert_eq!(config.test_fraction, 0.2);
    assert!(config.schema.is_none());
}

#[test]
fn test_cli_to_config_bad_schema_path() {
    let cli = Cli::parse_from([
        "tabboost",
        "-f",
        "data.csv",
        "-t",
        "label",
        "--schema",
        "/nonexistent/schema.json",
    ]);

    assert!(cli.to_config().is_err());
}

#[test]
fn test_binary_prints_only_accuracy() {
    let mut df = create_mixed_dataframe(100, 21);
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    let output = Command::cargo_bin("tabboost")
        .unwrap()
        .args(["-f", csv_path.to_str().unwrap(), "-t", "churn"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let accuracy: f64 = stdout.trim().parse().expect("stdout should be a single float");
    assert!((0.0..=1.0).contains(&accuracy));
}

#[test]
fn test_binary_missing_file_fails() {
    Command::cargo_bin("tabboost")
        .unwrap()
        .args(["-f", "/nonexistent/data.csv", "-t", "label"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_binary_missing_target_fails() {
    let (_temp_dir, csv_path) = write_csv_lines(&["a,b", "1,2", "3,4"]);

    Command::cargo_bin("tabboost")
        .unwrap()
        .args(["-f", csv_path.to_str().unwrap(), "-t", "label"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target column 'label' not found"));
}

#[test]
fn test_binary_summary_goes_to_stderr() {
    let mut df = create_mixed_dataframe(100, 3);
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    let output = Command::cargo_bin("tabboost")
        .unwrap()
        .args(["-f", csv_path.to_str().unwrap(), "-t", "churn", "--summary"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stderr.contains("RUN SUMMARY"));
    assert!(stderr.contains("80 / 20"));
}
