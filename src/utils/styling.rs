//! Terminal styling for the run header.
//!
//! Everything here writes to stderr; stdout is reserved for the metric.

use console::{style, Emoji};
use std::path::Path;

use crate::pipeline::PipelineConfig;

pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SEED: Emoji<'_, '_> = Emoji("🎲 ", "");
pub static TREE: Emoji<'_, '_> = Emoji("🌲 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    eprintln!();
    eprintln!(
        "    {} {}",
        style("tabboost").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    eprintln!(
        "    {}",
        style("Gradient-boosted classification from a CSV file").dim()
    );
    eprintln!("    {}", style("━".repeat(50)).dim());
}

/// Print the configuration card
pub fn print_config(config: &PipelineConfig) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    eprintln!("    ┌{}┐", line);
    eprintln!(
        "    │  {} Input:  {:<39}│",
        FOLDER,
        truncate_path(&config.file_path, 38)
    );
    eprintln!(
        "    │  {} Target: {:<39}│",
        TARGET,
        truncate_string(&config.target_column, 38)
    );
    eprintln!("    ├{}┤", line);
    eprintln!(
        "    │  {} Seed:   {:<39}│",
        SEED,
        style(config.seed).yellow()
    );
    eprintln!(
        "    │  {} Trees:  {:<39}│",
        TREE,
        style(format!(
            "{} x depth {}",
            config.boosting.n_estimators, config.boosting.max_depth
        ))
        .yellow()
    );
    eprintln!("    └{}┘", line);
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

/// Keep the tail of `s` when it exceeds `max_len` characters
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
