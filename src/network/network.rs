use std::fmt;

use log::{debug, trace};

use crate::error::{NnError, Result};
use crate::math::vector;
use crate::network::spec::NetworkSpec;
use crate::neuron::neuron::Neuron;

/// A fully connected feed-forward network of sigmoid neurons.
///
/// Layer 0 is the input layer: it has no neurons and its output cache holds
/// the most recent input. Every neuron in layer `i` reads the complete
/// output of layer `i - 1`.
#[derive(Debug, Clone)]
pub struct Network {
    layer_sizes: Vec<usize>,
    bias: f64,
    layers: Vec<Vec<Neuron>>,
    layer_outputs: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a network with one entry of `layer_sizes` per layer (input
    /// layer included). All neurons share `bias` and start with random
    /// weights.
    pub fn new(layer_sizes: Vec<usize>, bias: f64) -> Result<Network> {
        if layer_sizes.len() < 2 {
            return Err(NnError::InvalidTopology(format!(
                "need at least 2 layers, got {}",
                layer_sizes.len()
            )));
        }
        if let Some(i) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(NnError::InvalidTopology(format!("layer {i} has size 0")));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut layer_outputs = Vec::with_capacity(layer_sizes.len());
        for (i, &size) in layer_sizes.iter().enumerate() {
            layer_outputs.push(vector::zeros(size));
            if i == 0 {
                layers.push(Vec::new());
            } else {
                let layer = (0..size)
                    .map(|_| Neuron::new(layer_sizes[i - 1], bias))
                    .collect();
                layers.push(layer);
            }
        }

        debug!("new network: layers {layer_sizes:?}, bias {bias}");

        Ok(Network { layer_sizes, bias, layers, layer_outputs })
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    /// Neurons of layer `index`; empty for the input layer.
    pub fn layer(&self, index: usize) -> Option<&[Neuron]> {
        self.layers.get(index).map(|layer| layer.as_slice())
    }

    /// Per-layer outputs of the most recent `run` (zeros before the first).
    pub fn layer_outputs(&self) -> &[Vec<f64>] {
        &self.layer_outputs
    }

    /// Current weights nested as layer → neuron → weights, for layers 1..N-1.
    pub fn weights(&self) -> Vec<Vec<Vec<f64>>> {
        self.layers[1..]
            .iter()
            .map(|layer| layer.iter().map(|neuron| neuron.weights().to_vec()).collect())
            .collect()
    }

    /// Replaces every neuron's weights. `weights[i - 1][j]` goes to neuron
    /// `j` of layer `i`.
    ///
    /// The nesting is checked against the topology before anything is
    /// written; the length of each innermost list is left to
    /// `Neuron::evaluate` to check.
    pub fn set_weights(&mut self, weights: Vec<Vec<Vec<f64>>>) -> Result<()> {
        let expected_layers = self.layers.len() - 1;
        if weights.len() != expected_layers {
            return Err(NnError::IndexOutOfRange(format!(
                "expected weights for {expected_layers} layers, got {}",
                weights.len()
            )));
        }
        for (i, layer_weights) in weights.iter().enumerate() {
            let expected_neurons = self.layers[i + 1].len();
            if layer_weights.len() != expected_neurons {
                return Err(NnError::IndexOutOfRange(format!(
                    "layer {} has {expected_neurons} neurons, got {} weight lists",
                    i + 1,
                    layer_weights.len()
                )));
            }
        }

        for (layer, layer_weights) in self.layers[1..].iter_mut().zip(weights) {
            for (neuron, neuron_weights) in layer.iter_mut().zip(layer_weights) {
                neuron.set_weights(neuron_weights);
            }
        }

        debug!("loaded weights for {expected_layers} layers");
        Ok(())
    }

    /// Forward pass. Returns the output layer's values, which stay valid
    /// until the next call that mutates the network.
    pub fn run(&mut self, input: &[f64]) -> Result<&[f64]> {
        if input.len() != self.layer_sizes[0] {
            return Err(NnError::ShapeMismatch {
                expected: self.layer_sizes[0],
                actual: input.len(),
            });
        }

        self.layer_outputs[0].copy_from_slice(input);

        for i in 1..self.layers.len() {
            // Layer i reads only layer i - 1, so split the cache there.
            let (done, rest) = self.layer_outputs.split_at_mut(i);
            let previous = &done[i - 1];
            let current = &mut rest[0];
            for (slot, neuron) in current.iter_mut().zip(&self.layers[i]) {
                *slot = neuron.evaluate(previous)?;
            }
            trace!("layer {i} output: {current:?}");
        }

        Ok(&self.layer_outputs[self.layer_outputs.len() - 1])
    }

    /// Describes this network (topology, bias, current weights) as a spec.
    pub fn to_spec(&self) -> NetworkSpec {
        NetworkSpec {
            layer_sizes: self.layer_sizes.clone(),
            bias: self.bias,
            weights: Some(self.weights()),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate().skip(1) {
            for (j, neuron) in layer.iter().enumerate() {
                writeln!(f, "Layer {} Neuron {} {:?}", i + 1, j, neuron.weights())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    fn xor_weights() -> Vec<Vec<Vec<f64>>> {
        vec![
            vec![vec![-10.0, -10.0, 15.0], vec![15.0, 15.0, -10.0]],
            vec![vec![10.0, 10.0, -15.0]],
        ]
    }

    fn xor_network() -> Network {
        let mut network = Network::new(vec![2, 2, 1], 1.0).unwrap();
        network.set_weights(xor_weights()).unwrap();
        network
    }

    #[test]
    fn test_network_creation() {
        let network = Network::new(vec![3, 4, 2], 0.5).unwrap();
        assert_eq!(network.input_size(), 3);
        assert_eq!(network.output_size(), 2);
        assert_eq!(network.bias(), 0.5);
        assert!(network.layer(0).unwrap().is_empty());
        assert_eq!(network.layer(1).unwrap().len(), 4);
        assert_eq!(network.layer(2).unwrap().len(), 2);
        assert!(network.layer(3).is_none());
        for neuron in network.layer(1).unwrap() {
            assert_eq!(neuron.num_inputs(), 3);
            assert_eq!(neuron.bias(), 0.5);
        }
        for neuron in network.layer(2).unwrap() {
            assert_eq!(neuron.num_inputs(), 4);
        }
        let sizes: Vec<usize> = network.layer_outputs().iter().map(|o| o.len()).collect();
        assert_eq!(sizes, vec![3, 4, 2]);
        assert!(network.layer_outputs().iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn test_invalid_topology() {
        assert!(matches!(Network::new(vec![], 1.0), Err(NnError::InvalidTopology(_))));
        assert!(matches!(Network::new(vec![2], 1.0), Err(NnError::InvalidTopology(_))));
        assert!(matches!(Network::new(vec![2, 0, 1], 1.0), Err(NnError::InvalidTopology(_))));
        assert!(matches!(Network::new(vec![0, 1], 1.0), Err(NnError::InvalidTopology(_))));
    }

    #[test]
    fn test_xor_forward_pass() {
        let mut network = xor_network();
        let cases = [
            ([0.0, 0.0], 0.006695849330690521),
            ([0.0, 1.0], 0.9923558641717396),
            ([1.0, 0.0], 0.9923558641717396),
            ([1.0, 1.0], 0.0071528097665848715),
        ];
        for (input, expected) in cases {
            let output = network.run(&input).unwrap();
            assert_eq!(output.len(), 1);
            assert!((output[0] - expected).abs() < EPS, "{input:?} -> {}", output[0]);
        }
    }

    #[test]
    fn test_run_caches_every_layer() {
        let mut network = xor_network();
        network.run(&[1.0, 0.0]).unwrap();
        let outputs = network.layer_outputs();
        assert_eq!(outputs[0], vec![1.0, 0.0]);
        let hidden = network.layer(1).unwrap();
        assert_eq!(outputs[1][0], hidden[0].evaluate(&[1.0, 0.0]).unwrap());
        assert_eq!(outputs[1][1], hidden[1].evaluate(&[1.0, 0.0]).unwrap());
        let out = network.layer(2).unwrap()[0].evaluate(&outputs[1]).unwrap();
        assert_eq!(outputs[2][0], out);
    }

    #[test]
    fn test_run_is_idempotent() {
        let mut network = Network::new(vec![3, 5, 4, 2], 1.0).unwrap();
        let first = network.run(&[0.2, -0.4, 0.9]).unwrap().to_vec();
        let second = network.run(&[0.2, -0.4, 0.9]).unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_wrong_input_length() {
        let mut network = xor_network();
        for len in [0, 1, 3, 4] {
            let input = vec![0.0; len];
            assert_eq!(
                network.run(&input).unwrap_err(),
                NnError::ShapeMismatch { expected: 2, actual: len }
            );
        }
    }

    #[test]
    fn test_set_then_get_weights() {
        let network = xor_network();
        assert_eq!(network.weights(), xor_weights());
    }

    #[test]
    fn test_set_weights_wrong_layer_count() {
        let mut network = Network::new(vec![2, 2, 1], 1.0).unwrap();
        let before = network.weights();
        let mut weights = xor_weights();
        weights.pop();
        assert!(matches!(network.set_weights(weights), Err(NnError::IndexOutOfRange(_))));
        assert_eq!(network.weights(), before);

        let mut weights = xor_weights();
        weights.push(vec![vec![1.0, 1.0]]);
        assert!(matches!(network.set_weights(weights), Err(NnError::IndexOutOfRange(_))));
    }

    #[test]
    fn test_set_weights_wrong_neuron_count() {
        let mut network = Network::new(vec![2, 2, 1], 1.0).unwrap();
        let mut weights = xor_weights();
        weights[0].push(vec![1.0, 1.0, 1.0]);
        assert!(matches!(network.set_weights(weights), Err(NnError::IndexOutOfRange(_))));

        let mut weights = xor_weights();
        weights[1].clear();
        assert!(matches!(network.set_weights(weights), Err(NnError::IndexOutOfRange(_))));
    }

    #[test]
    fn test_short_weight_list_surfaces_on_run() {
        let mut network = Network::new(vec![2, 2, 1], 1.0).unwrap();
        let mut weights = xor_weights();
        weights[1][0] = vec![10.0, 10.0];
        network.set_weights(weights).unwrap();
        assert_eq!(
            network.run(&[0.0, 1.0]).unwrap_err(),
            NnError::ShapeMismatch { expected: 3, actual: 2 }
        );
    }

    #[test]
    fn test_weights_can_be_replaced_between_runs() {
        let mut network = xor_network();
        let xor = network.run(&[1.0, 1.0]).unwrap()[0];
        network
            .set_weights(vec![
                vec![vec![-10.0, -10.0, 15.0], vec![15.0, 15.0, -10.0]],
                vec![vec![-10.0, -10.0, 15.0]],
            ])
            .unwrap();
        let xnor = network.run(&[1.0, 1.0]).unwrap()[0];
        assert!(xor < 0.5);
        assert!(xnor > 0.5);
    }

    #[test]
    fn test_display_lists_weights() {
        let text = xor_network().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Layer 2 Neuron 0 [-10.0, -10.0, 15.0]",
                "Layer 2 Neuron 1 [15.0, 15.0, -10.0]",
                "Layer 3 Neuron 0 [10.0, 10.0, -15.0]",
            ]
        );
    }

    #[test]
    fn test_to_spec() {
        let spec = xor_network().to_spec();
        assert_eq!(spec.layer_sizes, vec![2, 2, 1]);
        assert_eq!(spec.bias, 1.0);
        assert_eq!(spec.weights, Some(xor_weights()));
    }
}
