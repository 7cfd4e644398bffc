use rand::Rng;
use serde::Serialize;

use crate::activation::sigmoid::sigmoid_derivative;
use crate::network::neuron::Neuron;

/// A fully-connected layer of sigmoid neurons sharing the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    /// `size` neurons, each with `input_size` weights drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        let neurons = (0..size).map(|_| Neuron::random(input_size, &mut *rng)).collect();
        Layer { neurons }
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Layer {
        Layer { neurons }
    }

    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Number of inputs each neuron expects.
    pub fn input_size(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::n_inputs)
    }

    /// Activates every neuron on the same `input`; returns their outputs in order.
    pub fn feed_from(&mut self, input: &[f64]) -> Vec<f64> {
        self.neurons.iter_mut().map(|n| n.activate(input)).collect()
    }

    /// Cached outputs of the last forward pass.
    pub fn outputs(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.output).collect()
    }

    /// Output-layer deltas: (output − target) · σ'(output).
    pub fn compute_output_deltas(&mut self, target: &[f64]) {
        debug_assert_eq!(target.len(), self.neurons.len());
        for (neuron, &expected) in self.neurons.iter_mut().zip(target) {
            let error = neuron.output - expected;
            neuron.delta = error * sigmoid_derivative(neuron.output);
        }
    }

    /// Hidden-layer deltas from the already computed deltas of `next`.
    ///
    /// Neuron j collects Σ_k w_kj · δ_k over every neuron k of `next`, where
    /// w_kj is the weight k applies to j's output.
    pub fn compute_hidden_deltas(&mut self, next: &Layer) {
        for (j, neuron) in self.neurons.iter_mut().enumerate() {
            let error: f64 = next.neurons.iter().map(|k| k.weights[j] * k.delta).sum();
            neuron.delta = error * sigmoid_derivative(neuron.output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn new_layer_has_requested_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        let layer = Layer::new(5, 3, &mut rng);
        assert_eq!(layer.size(), 5);
        assert_eq!(layer.input_size(), 3);
        assert!(layer.neurons.iter().all(|n| n.n_inputs() == 3));
    }

    #[test]
    fn feed_from_returns_one_output_per_neuron() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut layer = Layer::new(4, 2, &mut rng);
        let out = layer.feed_from(&[0.3, -0.1]);
        assert_eq!(out.len(), 4);
        assert_eq!(out, layer.outputs());
    }

    #[test]
    fn output_delta_matches_formula() {
        let mut layer = Layer::from_neurons(vec![Neuron::new(vec![0.0]), Neuron::new(vec![0.0])]);
        layer.neurons[0].output = 0.8;
        layer.neurons[1].output = 0.3;
        layer.compute_output_deltas(&[1.0, 0.0]);
        // (0.8 - 1) * 0.8 * 0.2 and (0.3 - 0) * 0.3 * 0.7
        assert!((layer.neurons[0].delta - (-0.032)).abs() < 1e-12);
        assert!((layer.neurons[1].delta - 0.063).abs() < 1e-12);
    }

    #[test]
    fn hidden_delta_sums_over_next_layer() {
        let mut hidden = Layer::from_neurons(vec![Neuron::new(vec![0.0]), Neuron::new(vec![0.0])]);
        hidden.neurons[0].output = 0.5;
        hidden.neurons[1].output = 0.9;

        let mut next = Layer::from_neurons(vec![
            Neuron::new(vec![0.2, 0.4]),
            Neuron::new(vec![-0.6, 1.0]),
        ]);
        next.neurons[0].delta = 0.1;
        next.neurons[1].delta = -0.05;

        hidden.compute_hidden_deltas(&next);

        // j=0: (0.2*0.1 + -0.6*-0.05) * 0.25 = 0.05 * 0.25
        // j=1: (0.4*0.1 + 1.0*-0.05) * 0.09 = -0.01 * 0.09
        assert!((hidden.neurons[0].delta - 0.0125).abs() < 1e-12);
        assert!((hidden.neurons[1].delta - (-0.0009)).abs() < 1e-12);
    }
}
