//! A from-scratch feedforward classifier: sigmoid neurons without bias,
//! L2 loss, online gradient descent via the delta rule, and k-fold
//! cross-validation around it.
//!
//! ```no_run
//! use ferrite_clf::{Network, NetworkSpec};
//!
//! # fn main() -> ferrite_clf::Result<()> {
//! let x = vec![vec![0.1, 0.2], vec![0.9, 0.8]];
//! let y = vec![0, 1];
//! let mut net = Network::new(&NetworkSpec::new(2, 2, vec![3], 1))?;
//! net.train(&x, &y, 0.5, 200)?;
//! let predicted = net.predict(&x)?;
//! assert_eq!(predicted.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod activation;
pub mod codec;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod crossval;

// Convenience re-exports
pub use error::{Error, Result};
pub use codec::label::{decode, encode};
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::neuron::Neuron;
pub use network::spec::NetworkSpec;
pub use network::dump::{save_params, write_params_json, write_params_text};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{train_loop, train_step, EpochStats, TrainConfig};
pub use data::dataset::Dataset;
pub use crossval::{crossval_folds, run_cross_validation, CrossValReport, ExperimentConfig, FoldResult};
