pub mod config;
pub mod folds;
pub mod runner;

pub use config::ExperimentConfig;
pub use folds::{crossval_folds, training_indices};
pub use runner::{accuracy, run_cross_validation, CrossValReport, FoldResult};
