use crate::error::{Error, Result};

/// One-hot encodes `label` into a target vector of length `n_classes`.
pub fn encode(label: usize, n_classes: usize) -> Result<Vec<f64>> {
    if label >= n_classes {
        return Err(Error::InvalidLabel { label, n_classes });
    }
    let mut target = vec![0.0; n_classes];
    target[label] = 1.0;
    Ok(target)
}

/// Index of the largest activation in `output`.
///
/// Ties go to the lowest index: an entry only replaces the current best when
/// it is strictly greater. Freshly initialized networks can emit exactly equal
/// activations, so this keeps predictions reproducible. `NaN` never compares
/// greater and is therefore never selected unless it sits at index 0.
pub fn decode(output: &[f64]) -> Result<usize> {
    if output.is_empty() {
        return Err(Error::dimension("decode", 1, 0));
    }
    let mut best = 0;
    for (i, &value) in output.iter().enumerate().skip(1) {
        if value > output[best] {
            best = i;
        }
    }
    Ok(best)
}
