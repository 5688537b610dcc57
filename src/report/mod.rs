//! Report module - summarizing a training run

pub mod summary;

pub use summary::*;
