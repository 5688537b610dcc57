//! Pipeline module - the stages of a training run

pub mod columns;
pub mod config;
pub mod encode;
pub mod error;
pub mod impute;
pub mod loader;
pub mod matrix;
pub mod metrics;
pub mod partition;
pub mod preprocess;
pub mod run;
pub mod scale;
pub mod split;
pub mod target;

pub use columns::*;
pub use config::*;
pub use encode::*;
pub use error::{PipelineError, Result};
pub use impute::*;
pub use loader::*;
pub use matrix::*;
pub use metrics::*;
pub use partition::*;
pub use preprocess::*;
pub use run::*;
pub use scale::*;
pub use split::*;
pub use target::*;
