//! Tabboost: Gradient-Boosted Classification CLI
//!
//! Trains a gradient-boosted tree classifier on a CSV file and prints the
//! accuracy on a held-out split to stdout.

use anyhow::{Context, Result};
use clap::Parser;

use tabboost::cli::Cli;
use tabboost::pipeline::run_pipeline;
use tabboost::utils::{init_logging, print_banner, print_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let config = cli.to_config().context("Failed to build configuration")?;

    if cli.summary {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(&config);
    }

    let summary = run_pipeline(&config)
        .with_context(|| format!("Training run failed for {}", config.file_path.display()))?;

    println!("{}", summary.accuracy);

    if cli.summary {
        summary.display();
    }

    Ok(())
}
