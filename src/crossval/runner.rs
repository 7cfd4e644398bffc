use std::fmt;

use crate::crossval::config::ExperimentConfig;
use crate::crossval::folds::{crossval_folds, training_indices};
use crate::data::dataset::Dataset;
use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::train::loop_fn::train_loop;

/// Outcome of a single fold.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldResult {
    /// 1-based fold number.
    pub fold: usize,
    pub n_train: usize,
    pub n_valid: usize,
    /// Percent of training rows classified correctly after training.
    pub train_accuracy: f64,
    /// Percent of held-out rows classified correctly.
    pub valid_accuracy: f64,
}

/// All fold results plus the network trained on the last fold.
#[derive(Debug, Clone)]
pub struct CrossValReport {
    pub folds: Vec<FoldResult>,
    pub last_network: Network,
}

impl CrossValReport {
    pub fn mean_train_accuracy(&self) -> f64 {
        mean(self.folds.iter().map(|f| f.train_accuracy))
    }

    pub fn mean_valid_accuracy(&self) -> f64 {
        mean(self.folds.iter().map(|f| f.valid_accuracy))
    }
}

impl fmt::Display for CrossValReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.folds.len();
        for fold in &self.folds {
            writeln!(
                f,
                " Fold {}/{}: acc_train = {:.2}%, acc_valid = {:.2}% (n_train = {}, n_valid = {})",
                fold.fold, total, fold.train_accuracy, fold.valid_accuracy, fold.n_train, fold.n_valid
            )?;
        }
        write!(
            f,
            "  -> acc_train_avg = {:.2}%, acc_valid_avg = {:.2}%",
            self.mean_train_accuracy(),
            self.mean_valid_accuracy()
        )
    }
}

/// Percent of positions where `predicted` matches `expected`; 0 for empty input.
pub fn accuracy(expected: &[usize], predicted: &[usize]) -> Result<f64> {
    if expected.len() != predicted.len() {
        return Err(Error::dimension("accuracy", expected.len(), predicted.len()));
    }
    if expected.is_empty() {
        return Ok(0.0);
    }
    let correct = expected.iter().zip(predicted).filter(|(a, b)| a == b).count();
    Ok(100.0 * correct as f64 / expected.len() as f64)
}

/// k-fold cross-validation of a freshly initialized network per fold.
///
/// Each fold trains on the complement of its validation indices (in
/// ascending row order) starting from the same seeded weights, so the whole
/// report is reproducible from `config` alone.
pub fn run_cross_validation(dataset: &Dataset, config: &ExperimentConfig) -> Result<CrossValReport> {
    config.validate()?;
    let n = dataset.len();
    let folds = crossval_folds(n, config.n_folds, config.seed_crossval)?;
    let spec = config.network_spec(dataset.input_dim(), dataset.n_classes);
    let train_config = config.train_config();

    let mut results = Vec::with_capacity(folds.len());
    let mut last_network = None;

    for (i, valid_idx) in folds.iter().enumerate() {
        let train = dataset.subset(&training_indices(n, valid_idx));
        let valid = dataset.subset(valid_idx);

        let mut network = Network::new(&spec)?;
        train_loop(&mut network, &train.inputs, &train.labels, &train_config)?;

        let train_pred = network.predict(&train.inputs)?;
        let valid_pred = network.predict(&valid.inputs)?;

        let result = FoldResult {
            fold: i + 1,
            n_train: train.len(),
            n_valid: valid.len(),
            train_accuracy: accuracy(&train.labels, &train_pred)?,
            valid_accuracy: accuracy(&valid.labels, &valid_pred)?,
        };
        tracing::info!(
            fold = result.fold,
            n_folds = folds.len(),
            acc_train = result.train_accuracy,
            acc_valid = result.valid_accuracy,
            "fold finished"
        );
        results.push(result);
        last_network = Some(network);
    }

    let last_network = last_network.ok_or_else(|| Error::config("cross-validation produced no folds"))?;
    Ok(CrossValReport { folds: results, last_network })
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::spec::NetworkSpec;

    #[test]
    fn accuracy_is_a_percentage() {
        assert_eq!(accuracy(&[0, 1, 2, 1], &[0, 1, 1, 1]).unwrap(), 75.0);
        assert_eq!(accuracy(&[], &[]).unwrap(), 0.0);
        assert!(accuracy(&[0], &[0, 1]).is_err());
    }

    #[test]
    fn report_formats_like_the_console_summary() {
        let report = CrossValReport {
            folds: vec![
                FoldResult { fold: 1, n_train: 3, n_valid: 1, train_accuracy: 100.0, valid_accuracy: 50.0 },
                FoldResult { fold: 2, n_train: 3, n_valid: 1, train_accuracy: 90.0, valid_accuracy: 100.0 },
            ],
            last_network: Network::new(&NetworkSpec::new(1, 2, vec![], 0)).unwrap(),
        };
        let text = report.to_string();
        assert_eq!(
            text,
            " Fold 1/2: acc_train = 100.00%, acc_valid = 50.00% (n_train = 3, n_valid = 1)\n \
             Fold 2/2: acc_train = 90.00%, acc_valid = 100.00% (n_train = 3, n_valid = 1)\n  \
             -> acc_train_avg = 95.00%, acc_valid_avg = 75.00%"
        );
    }

    #[test]
    fn every_row_is_validated_exactly_once() {
        let inputs: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64 / 10.0, 1.0 - i as f64 / 10.0]).collect();
        let labels: Vec<usize> = (0..10).map(|i| usize::from(i >= 5)).collect();
        let dataset = Dataset::new(inputs, labels, 2).unwrap();
        let config = ExperimentConfig { hidden_layers: vec![3], epochs: 5, n_folds: 3, ..Default::default() };

        let report = run_cross_validation(&dataset, &config).unwrap();
        assert_eq!(report.folds.len(), 3);
        assert_eq!(report.folds.iter().map(|f| f.n_valid).sum::<usize>(), 10);
        assert!(report.folds.iter().all(|f| f.n_train + f.n_valid == 10));
        assert_eq!(report.last_network.input_dim(), 2);
        assert_eq!(report.last_network.output_dim(), 2);
    }

    #[test]
    fn too_many_folds_is_rejected() {
        let dataset = Dataset::new(vec![vec![0.0], vec![1.0]], vec![0, 1], 2).unwrap();
        let config = ExperimentConfig { n_folds: 3, ..Default::default() };
        assert!(matches!(run_cross_validation(&dataset, &config), Err(Error::InvalidConfiguration(_))));
    }
}
