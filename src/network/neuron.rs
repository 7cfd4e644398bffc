use rand::Rng;
use serde::Serialize;

use crate::activation::sigmoid::sigmoid;

/// A single sigmoid unit: one weight per input, no bias.
///
/// `output` and `delta` are scratch. `output` is rewritten by every forward
/// pass and `delta` by every backward pass; read them only right after the
/// call that produced them (and before the weight update that consumes them).
/// Their values at any other time are whatever the last sample left behind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
    #[serde(skip)]
    pub output: f64,
    pub delta: f64,
}

impl Neuron {
    pub fn new(weights: Vec<f64>) -> Neuron {
        Neuron { weights, output: 0.0, delta: 0.0 }
    }

    /// Weights drawn uniformly from `[0, 1)`.
    pub(crate) fn random<R: Rng + ?Sized>(n_inputs: usize, rng: &mut R) -> Neuron {
        let weights = (0..n_inputs).map(|_| rng.gen::<f64>()).collect();
        Neuron::new(weights)
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// σ(w · x), cached in `output`.
    pub fn activate(&mut self, inputs: &[f64]) -> f64 {
        debug_assert_eq!(inputs.len(), self.weights.len());
        let z: f64 = self.weights.iter().zip(inputs).map(|(w, x)| w * x).sum();
        self.output = sigmoid(z);
        self.output
    }
}
