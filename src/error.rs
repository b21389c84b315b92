//! Error types for the Hopfield crate.
//!
//! This module provides a unified error type for all fallible operations,
//! using the `thiserror` crate for ergonomic error handling. Terminal
//! simulator conditions (converged, exhausted) are not errors; they are
//! reported through [`crate::SimulatorStatus`].

use thiserror::Error;

/// The main error type for Hopfield operations.
#[derive(Error, Debug)]
pub enum HopfieldError {
    /// Simulator has not been initialized before use
    #[error("Simulator not initialized - call initialize() before use")]
    NotInitialized,

    /// Image or vector dimensions do not match the network size
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    Shape {
        /// Expected size (side length or neuron count)
        expected: usize,
        /// Actual size received
        actual: usize,
    },

    /// Training was requested with no stored patterns
    #[error("Training set is empty - at least one pattern is required")]
    EmptyTrainingSet,

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for Hopfield operations.
pub type Result<T> = std::result::Result<T, HopfieldError>;
