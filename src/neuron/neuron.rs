use log::{debug, warn};

use crate::activation::activation::sigmoid;
use crate::error::{NnError, Result};
use crate::math::vector;

/// A single sigmoid perceptron.
///
/// `weights` holds one entry per input followed by the weight applied to
/// the constant `bias` input, so a neuron with `n` inputs carries `n + 1`
/// weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    num_inputs: usize,
    weights: Vec<f64>,
    bias: f64,
}

impl Neuron {
    /// Creates a neuron with weights drawn uniformly from [-1, 1).
    pub fn new(num_inputs: usize, bias: f64) -> Neuron {
        debug!("new neuron: {num_inputs} inputs, bias {bias}");
        Neuron {
            num_inputs,
            weights: vector::random_uniform(num_inputs + 1),
            bias,
        }
    }

    /// Creates a neuron from an explicit weight list; the last weight is the
    /// bias weight, so `num_inputs = weights.len() - 1`.
    pub fn with_weights(weights: Vec<f64>, bias: f64) -> Result<Neuron> {
        if weights.is_empty() {
            return Err(NnError::ShapeMismatch { expected: 1, actual: 0 });
        }
        Ok(Neuron {
            num_inputs: weights.len() - 1,
            weights,
            bias,
        })
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Replaces the weight vector wholesale.
    ///
    /// The length is not enforced here; a list of the wrong length is kept
    /// and reported as a `ShapeMismatch` by the next `evaluate`.
    pub fn set_weights(&mut self, weights: Vec<f64>) {
        if weights.len() != self.num_inputs + 1 {
            warn!(
                "neuron with {} inputs given {} weights (expected {})",
                self.num_inputs,
                weights.len(),
                self.num_inputs + 1
            );
        }
        self.weights = weights;
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    /// Computes `sigmoid(dot(input ++ [bias], weights))`.
    pub fn evaluate(&self, input: &[f64]) -> Result<f64> {
        if input.len() != self.num_inputs {
            return Err(NnError::ShapeMismatch { expected: self.num_inputs, actual: input.len() });
        }
        if self.weights.len() != self.num_inputs + 1 {
            return Err(NnError::ShapeMismatch {
                expected: self.num_inputs + 1,
                actual: self.weights.len(),
            });
        }

        let (input_weights, bias_weight) = self.weights.split_at(self.num_inputs);
        let z = vector::dot(input, input_weights)? + self.bias * bias_weight[0];
        Ok(sigmoid(z))
    }
}
