use crate::{
    codec::label::encode,
    error::Result,
    loss::mse::MseLoss,
    network::network::Network,
    optim::sgd::Sgd,
};

/// One online update on a single example: forward, backward, delta-rule step.
///
/// Returns the L2 loss of the forward pass, i.e. before the update.
pub fn train_step(
    network: &mut Network,
    input: &[f64],
    label: usize,
    optimizer: &Sgd,
) -> Result<f64> {
    let expected = encode(label, network.output_dim())?;

    // Forward pass
    let output = network.forward(input)?;
    let loss = MseLoss::loss(&output, &expected);

    // Backward pass: deltas for every neuron, output layer first
    network.backward(&expected)?;

    // Weight update uses this example's cached activations
    network.update_weights(input, optimizer)?;

    Ok(loss)
}
