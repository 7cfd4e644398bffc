use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};

/// Splits `0..n` into `n_folds` disjoint validation folds.
///
/// The indices are shuffled with a `StdRng` seeded from `seed` and then cut
/// into contiguous runs. When `n_folds` does not divide `n`, the first
/// `n % n_folds` folds hold one extra index, so every index lands in exactly
/// one fold.
pub fn crossval_folds(n: usize, n_folds: usize, seed: u64) -> Result<Vec<Vec<usize>>> {
    if n_folds == 0 {
        return Err(Error::config("n_folds must be > 0"));
    }
    if n_folds > n {
        return Err(Error::config(format!(
            "n_folds ({n_folds}) exceeds the number of samples ({n})"
        )));
    }

    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(&mut StdRng::seed_from_u64(seed));

    let base = n / n_folds;
    let extra = n % n_folds;
    let mut folds = Vec::with_capacity(n_folds);
    let mut start = 0;
    for i in 0..n_folds {
        let size = base + usize::from(i < extra);
        folds.push(permutation[start..start + size].to_vec());
        start += size;
    }
    Ok(folds)
}

/// Every index of `0..n` not in `fold`, ascending.
pub fn training_indices(n: usize, fold: &[usize]) -> Vec<usize> {
    let mut held_out = vec![false; n];
    for &i in fold {
        held_out[i] = true;
    }
    (0..n).filter(|&i| !held_out[i]).collect()
}
