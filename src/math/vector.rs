use rand::prelude::*;

use crate::error::{NnError, Result};

/// A vector of `len` zeros.
pub fn zeros(len: usize) -> Vec<f64> {
    vec![0.0; len]
}

/// A vector of `len` values drawn uniformly from [-1, 1).
pub fn random_uniform(len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()
}

/// Dot product of two equal-length vectors.
///
/// Accumulates left to right so results are reproducible for a given
/// ordering of the operands.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(NnError::ShapeMismatch { expected: b.len(), actual: a.len() });
    }

    let mut sum = 0.0;
    for i in 0..a.len() {
        sum += a[i] * b[i];
    }

    Ok(sum)
}
