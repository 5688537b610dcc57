//! Tabboost: Gradient-Boosted Classification Library
//!
//! Loads a CSV dataset, imputes, scales and one-hot encodes its features,
//! trains a gradient-boosted tree classifier and scores it on a held-out split.

pub mod boosting;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
