use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::codec::label::decode;
use crate::error::{Error, Result};
use crate::layers::dense::Layer;
use crate::network::spec::NetworkSpec;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// A stack of fully-connected sigmoid layers, hidden layers first and the
/// output layer (one neuron per class) last.
///
/// The network exclusively owns every neuron record, including the per-neuron
/// `output`/`delta` scratch; outside code only ever gets shared access through
/// [`Network::layers`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network {
    input_dim: usize,
    output_dim: usize,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds and seeds a network from `spec`.
    ///
    /// All weights come from one `StdRng` seeded with `spec.seed`, drawn layer
    /// by layer and neuron by neuron, so the same spec always yields the same
    /// initial weights.
    pub fn new(spec: &NetworkSpec) -> Result<Network> {
        spec.validate()?;
        let mut rng = StdRng::seed_from_u64(spec.seed);
        let layers: Vec<Layer> = spec
            .layer_shapes()
            .into_iter()
            .map(|(size, input_size)| Layer::new(size, input_size, &mut rng))
            .collect();
        tracing::trace!(
            input_dim = spec.input_dim,
            output_dim = spec.output_dim,
            hidden_layers = ?spec.hidden_layers,
            seed = spec.seed,
            "network initialized"
        );
        Ok(Network {
            input_dim: spec.input_dim,
            output_dim: spec.output_dim,
            layers,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// Read access to every layer, input side first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Forward pass; caches each neuron's activation for backprop.
    pub fn forward(&mut self, sample: &[f64]) -> Result<Vec<f64>> {
        self.check_input(sample, "forward input")?;
        let mut current = sample.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        Ok(current)
    }

    /// Backward pass for the sample of the preceding [`Network::forward`]
    /// call. Writes a delta into every neuron, output layer first.
    pub fn backward(&mut self, target: &[f64]) -> Result<()> {
        if target.len() != self.output_dim {
            return Err(Error::dimension("backward target", self.output_dim, target.len()));
        }
        let last = self.layers.len() - 1;
        self.layers[last].compute_output_deltas(target);
        for i in (0..last).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            head[i].compute_hidden_deltas(&tail[0]);
        }
        Ok(())
    }

    /// Applies one delta-rule step to every layer.
    ///
    /// `sample` must be the input of the preceding forward pass: layer 0 is
    /// updated against it, every later layer against the cached outputs of
    /// the layer below.
    pub fn update_weights(&mut self, sample: &[f64], optimizer: &Sgd) -> Result<()> {
        self.check_input(sample, "update input")?;
        for i in 0..self.layers.len() {
            let (head, tail) = self.layers.split_at_mut(i);
            match head.last() {
                Some(prev) => optimizer.step(&mut tail[0], &prev.outputs()),
                None => optimizer.step(&mut tail[0], sample),
            }
        }
        Ok(())
    }

    /// Online training: see [`train_loop`].
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        labels: &[usize],
        learning_rate: f64,
        epochs: usize,
    ) -> Result<Vec<EpochStats>> {
        train_loop(self, inputs, labels, &TrainConfig::new(learning_rate, epochs))
    }

    /// Predicted class of every row, in row order.
    ///
    /// Weights are left untouched, but the neurons' cached outputs are
    /// overwritten by the forward passes.
    pub fn predict(&mut self, inputs: &[Vec<f64>]) -> Result<Vec<usize>> {
        inputs
            .iter()
            .map(|row| self.forward(row).and_then(|out| decode(&out)))
            .collect()
    }

    /// Raw output activations of every row, one value per class.
    pub fn predict_proba(&mut self, inputs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        inputs.iter().map(|row| self.forward(row)).collect()
    }

    fn check_input(&self, sample: &[f64], context: &'static str) -> Result<()> {
        if sample.len() != self.input_dim {
            return Err(Error::dimension(context, self.input_dim, sample.len()));
        }
        Ok(())
    }
}
