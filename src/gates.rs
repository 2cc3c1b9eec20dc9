//! Hand-picked weights that make sigmoid neurons behave like logic gates.

use sigmoid_mlp::{Network, Neuron, Result};

/// Single neuron, weights `[x0, x1, bias]`.
pub const AND_WEIGHTS: [f64; 3] = [10.0, 10.0, -15.0];
pub const OR_WEIGHTS: [f64; 3] = [20.0, 20.0, -15.0];

/// Hidden layer of the `[2, 2, 1]` XOR network: a NAND-like and an OR-like unit.
pub const XOR_HIDDEN_WEIGHTS: [[f64; 3]; 2] = [[-10.0, -10.0, 15.0], [15.0, 15.0, -10.0]];
pub const XOR_OUTPUT_WEIGHTS: [[f64; 3]; 1] = [[10.0, 10.0, -15.0]];

/// The four two-bit inputs in truth-table order.
pub const TRUTH_TABLE_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];

pub fn and_neuron() -> Neuron {
    let mut neuron = Neuron::new(2, 1.0);
    neuron.set_weights(AND_WEIGHTS.to_vec());
    neuron
}

pub fn or_neuron() -> Neuron {
    let mut neuron = Neuron::new(2, 1.0);
    neuron.set_weights(OR_WEIGHTS.to_vec());
    neuron
}

pub fn xor_network() -> Result<Network> {
    let mut network = Network::new(vec![2, 2, 1], 1.0)?;
    network.set_weights(vec![
        XOR_HIDDEN_WEIGHTS.iter().map(|w| w.to_vec()).collect(),
        XOR_OUTPUT_WEIGHTS.iter().map(|w| w.to_vec()).collect(),
    ])?;
    Ok(network)
}

/// Evaluates `neuron` on every row of the two-input truth table.
pub fn neuron_truth_table(neuron: &Neuron) -> Result<Vec<([f64; 2], f64)>> {
    TRUTH_TABLE_INPUTS
        .iter()
        .map(|input| neuron.evaluate(input).map(|output| (*input, output)))
        .collect()
}

/// Runs `network` on every row of the two-input truth table, keeping the
/// first output.
pub fn network_truth_table(network: &mut Network) -> Result<Vec<([f64; 2], f64)>> {
    let mut rows = Vec::with_capacity(TRUTH_TABLE_INPUTS.len());
    for input in TRUTH_TABLE_INPUTS {
        let output = network.run(&input)?[0];
        rows.push((input, output));
    }
    Ok(rows)
}
