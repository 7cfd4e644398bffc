use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::network::spec::NetworkSpec;
use crate::train::train_config::TrainConfig;

/// Every knob of a cross-validated training run.
///
/// Missing fields in a JSON file fall back to [`ExperimentConfig::default`]:
/// one hidden layer of 5, η = 0.1, 400 epochs, 4 folds, both seeds 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Neuron count of every hidden layer, input side first.
    pub hidden_layers: Vec<usize>,
    pub learning_rate: f64,
    pub epochs: usize,
    pub n_folds: usize,
    /// Seed of the fold shuffle.
    pub seed_crossval: u64,
    /// Seed of the initial weights; every fold starts from the same weights.
    pub seed_weights: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            hidden_layers: vec![5],
            learning_rate: 0.1,
            epochs: 400,
            n_folds: 4,
            seed_crossval: 1,
            seed_weights: 1,
        }
    }
}

impl ExperimentConfig {
    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.learning_rate, self.epochs)
    }

    /// Architecture for a dataset with `input_dim` features and `n_classes` classes.
    pub fn network_spec(&self, input_dim: usize, n_classes: usize) -> NetworkSpec {
        NetworkSpec::new(input_dim, n_classes, self.hidden_layers.clone(), self.seed_weights)
    }

    /// Checks everything that does not depend on the data.
    pub fn validate(&self) -> Result<()> {
        self.train_config().validate()?;
        if self.n_folds < 2 {
            return Err(Error::config(format!(
                "n_folds must be at least 2 so every fold has a training set, got {}",
                self.n_folds
            )));
        }
        if let Some(i) = self.hidden_layers.iter().position(|&size| size == 0) {
            return Err(Error::config(format!("hidden layer {i} has zero neurons")));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes an `ExperimentConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<ExperimentConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
