/// Logistic sigmoid σ(x) = 1 / (1 + e^-x).
///
/// Evaluated in two branches so that `exp` is only ever called on a
/// non-positive argument: no overflow to `inf`, and never `NaN` for finite
/// input.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Derivative of the sigmoid expressed through its own output:
/// σ'(x) = σ(x)(1 − σ(x)).
///
/// Takes the cached activation, not the pre-activation sum, which is what the
/// neurons keep around after a forward pass.
pub fn sigmoid_derivative(output: f64) -> f64 {
    output * (1.0 - output)
}
