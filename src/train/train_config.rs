use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hyperparameters of a `train_loop` run.
///
/// # Fields
/// - `learning_rate` — step size η of the delta rule; positive and finite
/// - `epochs`        — number of full passes over the training data; > 0
///
/// Training is always online (one update per example, stored order), so
/// there is no batch size here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        TrainConfig { learning_rate, epochs }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::config(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(Error::config("epochs must be > 0"));
        }
        Ok(())
    }
}
