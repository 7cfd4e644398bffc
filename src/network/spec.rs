use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Architecture of a classifier plus the seed for its initial weights.
///
/// Fields:
/// - `input_dim`     — number of features per sample
/// - `output_dim`    — number of classes (one output neuron per class)
/// - `hidden_layers` — neuron count of every hidden layer, input side first;
///                     may be empty for a single-layer network
/// - `seed`          — seed of the weight generator; equal seeds give equal
///                     initial weights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_dim: usize,
    pub output_dim: usize,
    #[serde(default)]
    pub hidden_layers: Vec<usize>,
    #[serde(default)]
    pub seed: u64,
}

impl NetworkSpec {
    pub fn new(input_dim: usize, output_dim: usize, hidden_layers: Vec<usize>, seed: u64) -> Self {
        NetworkSpec { input_dim, output_dim, hidden_layers, seed }
    }

    /// Rejects zero-sized dimensions up front so a bad shape never reaches a
    /// forward pass.
    pub fn validate(&self) -> Result<()> {
        if self.input_dim == 0 {
            return Err(Error::config("input_dim must be > 0"));
        }
        if self.output_dim == 0 {
            return Err(Error::config("output_dim must be > 0"));
        }
        if let Some(i) = self.hidden_layers.iter().position(|&size| size == 0) {
            return Err(Error::config(format!("hidden layer {i} has zero neurons")));
        }
        Ok(())
    }

    /// `(size, input_size)` of every layer, input → output.
    pub fn layer_shapes(&self) -> Vec<(usize, usize)> {
        let mut shapes = Vec::with_capacity(self.hidden_layers.len() + 1);
        let mut input_size = self.input_dim;
        for &size in self.hidden_layers.iter().chain(std::iter::once(&self.output_dim)) {
            shapes.push((size, input_size));
            input_size = size;
        }
        shapes
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_shapes_chain_sizes() {
        let spec = NetworkSpec::new(4, 3, vec![5, 2], 1);
        assert_eq!(spec.layer_shapes(), vec![(5, 4), (2, 5), (3, 2)]);
    }

    #[test]
    fn no_hidden_layers_connects_input_to_output() {
        let spec = NetworkSpec::new(7, 3, vec![], 1);
        assert_eq!(spec.layer_shapes(), vec![(3, 7)]);
    }

    #[test]
    fn validate_rejects_zero_sizes() {
        assert!(NetworkSpec::new(0, 3, vec![5], 1).validate().is_err());
        assert!(NetworkSpec::new(4, 0, vec![5], 1).validate().is_err());
        let err = NetworkSpec::new(4, 3, vec![5, 0], 1).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(msg) if msg.contains("hidden layer 1")));
        assert!(NetworkSpec::new(4, 3, vec![], 1).validate().is_ok());
    }

    #[test]
    fn json_round_trip() {
        let spec = NetworkSpec::new(4, 3, vec![5], 42);
        let path = std::env::temp_dir().join("ferrite_clf_spec_round_trip.json");
        let path = path.to_str().unwrap();
        spec.save_json(path).unwrap();
        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(loaded, spec);
    }
}
