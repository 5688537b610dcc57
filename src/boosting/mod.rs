//! Gradient-boosted decision trees for classification

pub mod config;
pub mod model;
pub mod objective;
pub mod tree;

pub use config::BoostingConfig;
pub use model::GradientBoostedClassifier;
pub use objective::Objective;
pub use tree::{RegressionTree, TreeParams};
