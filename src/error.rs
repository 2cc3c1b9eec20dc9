//! Error types for the crate.

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, NnError>;

/// Contract violations raised by neurons and networks.
///
/// All variants describe malformed caller data; none are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NnError {
    /// A vector did not have the length the computation expects.
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Fewer than two layers, or a layer of size zero.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// Nested weight lists do not match the network's layer/neuron counts.
    #[error("weight index out of range: {0}")]
    IndexOutOfRange(String),
}

/// Failures while reading a `NetworkSpec` from disk.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("failed to read spec: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed spec: {0}")]
    Json(#[from] serde_json::Error),
}
