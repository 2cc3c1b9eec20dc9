/// Logistic sigmoid `1 / (1 + e^-z)`.
///
/// The negative branch is rewritten as `e^z / (1 + e^z)` so that `exp` is
/// only ever called with a non-positive argument and cannot overflow.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
