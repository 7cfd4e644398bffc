/// L2 loss of one sample. Only reported per epoch; the matching gradient is
/// folded into the output-layer delta.
pub struct MseLoss;

impl MseLoss {
    /// mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        debug_assert_eq!(predicted.len(), expected.len());
        let n = predicted.len() as f64;
        predicted.iter().zip(expected)
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}
