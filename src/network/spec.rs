use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::{Result, SpecError};
use crate::network::network::Network;

fn default_bias() -> f64 {
    1.0
}

/// A serializable description of a network: topology, shared bias and,
/// optionally, the weights to load into it.
///
/// Fields:
/// - `layer_sizes` — neurons per layer, input layer first
/// - `bias`        — constant bias input shared by every neuron (default `1.0`)
/// - `weights`     — layer → neuron → weights for layers 1..N-1; when absent
///                   the network keeps its random initial weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layer_sizes: Vec<usize>,
    #[serde(default = "default_bias")]
    pub bias: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<Vec<Vec<f64>>>>,
}

impl NetworkSpec {
    /// Constructs the described network and loads its weights, if any.
    pub fn build(&self) -> Result<Network> {
        let mut network = Network::new(self.layer_sizes.clone(), self.bias)?;
        if let Some(weights) = &self.weights {
            network.set_weights(weights.clone())?;
        }
        Ok(network)
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<NetworkSpec> {
        serde_json::from_str(json)
    }

    /// Reads a spec from a JSON file; see [`NetworkSpec::from_json_str`].
    pub fn load_json(path: impl AsRef<Path>) -> std::result::Result<NetworkSpec, SpecError> {
        let text = fs::read_to_string(path)?;
        Ok(NetworkSpec::from_json_str(&text)?)
    }

    /// Serializes the spec to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
