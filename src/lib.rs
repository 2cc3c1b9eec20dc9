pub mod math;
pub mod activation;
pub mod neuron;
pub mod network;
pub mod error;

// Convenience re-exports
pub use activation::activation::sigmoid;
pub use neuron::neuron::Neuron;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use error::{NnError, Result, SpecError};
