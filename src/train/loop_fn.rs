use std::time::Instant;

use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_step;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of online gradient descent and
/// returns one [`EpochStats`] per epoch.
///
/// # Arguments
/// - `network` — mutable reference to the network; modified in place
/// - `inputs`  — training samples, each of length `network.input_dim()`
/// - `labels`  — class index of each sample, in `[0, network.output_dim())`
/// - `config`  — learning rate and epoch count
///
/// Every epoch visits the samples in stored order; there is no shuffling, so
/// the same network, data and config always produce the same weights.
///
/// # Errors
/// The whole run is validated before the first update, so on error the
/// weights are untouched:
/// - `InvalidConfiguration` for a bad learning rate, zero epochs or an empty
///   training set
/// - `DimensionMismatch` if `inputs` and `labels` differ in length or a row
///   has the wrong width
/// - `InvalidLabel` if a label is outside the network's class range
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[usize],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    config.validate()?;
    validate_training_set(network, inputs, labels)?;
    let optimizer = Sgd::new(config.learning_rate)?;

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let train_loss = run_one_epoch(network, inputs, labels, &optimizer)?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        tracing::debug!(
            epoch = stats.epoch,
            total = stats.total_epochs,
            loss = stats.train_loss,
            elapsed_ms = stats.elapsed_ms,
            "epoch finished"
        );
        history.push(stats);
    }

    if let Some(last) = history.last() {
        tracing::info!(
            epochs = config.epochs,
            samples = inputs.len(),
            final_loss = last.train_loss,
            "training finished"
        );
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over the training data in stored order, one update per sample.
/// Returns the mean loss over all samples.
fn run_one_epoch(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[usize],
    optimizer: &Sgd,
) -> Result<f64> {
    let mut total_loss = 0.0;
    for (input, &label) in inputs.iter().zip(labels) {
        total_loss += train_step(network, input, label, optimizer)?;
    }
    Ok(total_loss / inputs.len() as f64)
}

fn validate_training_set(network: &Network, inputs: &[Vec<f64>], labels: &[usize]) -> Result<()> {
    if inputs.is_empty() {
        return Err(Error::config("training set must not be empty"));
    }
    if inputs.len() != labels.len() {
        return Err(Error::dimension("training labels", inputs.len(), labels.len()));
    }
    if let Some(row) = inputs.iter().find(|row| row.len() != network.input_dim()) {
        return Err(Error::dimension("training row", network.input_dim(), row.len()));
    }
    let n_classes = network.output_dim();
    if let Some(&label) = labels.iter().find(|&&label| label >= n_classes) {
        return Err(Error::InvalidLabel { label, n_classes });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::spec::NetworkSpec;

    fn toy() -> (Vec<Vec<f64>>, Vec<usize>) {
        let inputs = vec![
            vec![0.9, 0.1],
            vec![0.8, 0.2],
            vec![0.1, 0.9],
            vec![0.2, 0.8],
        ];
        (inputs, vec![0, 0, 1, 1])
    }

    #[test]
    fn returns_one_stat_per_epoch() {
        let (x, y) = toy();
        let mut net = Network::new(&NetworkSpec::new(2, 2, vec![3], 1)).unwrap();
        let history = train_loop(&mut net, &x, &y, &TrainConfig::new(0.5, 25)).unwrap();
        assert_eq!(history.len(), 25);
        assert_eq!(history[0].epoch, 1);
        assert_eq!(history[24].epoch, 25);
        assert!(history.iter().all(|s| s.total_epochs == 25 && s.train_loss.is_finite()));
    }

    #[test]
    fn loss_decreases_over_training() {
        let (x, y) = toy();
        let mut net = Network::new(&NetworkSpec::new(2, 2, vec![3], 1)).unwrap();
        let history = train_loop(&mut net, &x, &y, &TrainConfig::new(0.5, 300)).unwrap();
        assert!(history[299].train_loss < history[0].train_loss);
    }

    #[test]
    fn rejects_bad_inputs_before_touching_weights() {
        let (x, y) = toy();
        let mut net = Network::new(&NetworkSpec::new(2, 2, vec![3], 1)).unwrap();
        let pristine = net.clone();

        let err = train_loop(&mut net, &x, &y[..3], &TrainConfig::new(0.1, 5)).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));

        let mut ragged = x.clone();
        ragged[3] = vec![0.2, 0.8, 0.0];
        let err = train_loop(&mut net, &ragged, &y, &TrainConfig::new(0.1, 5)).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, actual: 3, .. }));

        let err = train_loop(&mut net, &x, &[0, 0, 1, 2], &TrainConfig::new(0.1, 5)).unwrap_err();
        assert!(matches!(err, Error::InvalidLabel { label: 2, .. }));

        let err = train_loop(&mut net, &x, &y, &TrainConfig::new(0.1, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = train_loop(&mut net, &[], &[], &TrainConfig::new(0.1, 5)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        assert_eq!(net, pristine);
    }
}
