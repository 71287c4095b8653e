/// Logistic sigmoid `1 / (1 + e^-x)`, the activation applied after every
/// dense layer. `sigmoid(0) == 0.5`; moderate inputs land strictly inside
/// `(0, 1)`, but in `f64` the result rounds to exactly `1.0` once `x` exceeds
/// roughly 36.7 and underflows towards `0.0` for large negative `x`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
