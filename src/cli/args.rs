//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{PipelineConfig, Result, Schema, DEFAULT_SEED};

/// Tabboost - Train a gradient-boosted classifier on a CSV file and print held-out accuracy
#[derive(Parser, Debug)]
#[command(name = "tabboost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path of the CSV file containing the data to learn from
    #[arg(short = 'f', long = "file_path")]
    pub file_path: PathBuf,

    /// The column in the CSV file that is the target (what you need to predict)
    #[arg(short = 't', long = "target_column")]
    pub target_column: String,

    /// Seed for the train/evaluation shuffle. The same seed gives the same split.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// JSON file declaring column kinds, e.g. {"zip": "categorical"}.
    /// Columns not listed are classified by their storage type.
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Print a run summary table to stderr
    #[arg(long, default_value = "false")]
    pub summary: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the run configuration, reading the schema file if one was given
    pub fn to_config(&self) -> Result<PipelineConfig> {
        let mut config =
            PipelineConfig::new(self.file_path.clone(), self.target_column.clone(), self.seed);
        if let Some(path) = &self.schema {
            config = config.with_schema(Schema::from_json_file(path)?);
        }
        Ok(config)
    }
}
