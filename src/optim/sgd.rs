use crate::error::{Error, Result};
use crate::layers::dense::Layer;

/// Plain per-example gradient descent, no momentum and no weight decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(Error::config(format!(
                "learning rate must be positive and finite, got {learning_rate}"
            )));
        }
        Ok(Sgd { learning_rate })
    }

    /// Delta-rule update of one layer: w_j ← w_j − η · δ · x_j, where `inputs`
    /// are the values the layer saw in the current forward pass.
    pub fn step(&self, layer: &mut Layer, inputs: &[f64]) {
        for neuron in &mut layer.neurons {
            debug_assert_eq!(neuron.weights.len(), inputs.len());
            let delta = neuron.delta;
            for (w, &x) in neuron.weights.iter_mut().zip(inputs) {
                *w -= self.learning_rate * delta * x;
            }
        }
    }
}
