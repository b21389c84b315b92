//! Hopfield - Discrete Associative Memory for Binary Images
//!
//! This crate simulates a discrete Hopfield network that stores a small set
//! of square binary images and recalls one of them from a noise-corrupted
//! input through iterative, energy-descending asynchronous updates.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - **PatternCodec**: converts a 2-D binary [`Image`] to a flat
//!   [`BipolarVector`] (0 → -1, 1 → +1, row-major) and back
//! - **Trainer**: builds a symmetric, zero-diagonal [`WeightMatrix`] with
//!   the Hebbian or the pseudo-inverse-style rule
//! - **NetworkState**: the current bipolar state with energy and overlap
//!   queries
//! - **Dynamics**: one asynchronous sweep over a random fraction of the
//!   neurons
//! - **Simulator**: repeated sweeps under a convergence and iteration-cap
//!   stopping policy, with a step/run contract for front ends
//!
//! # Examples
//!
//! ## Recall a noisy pattern
//!
//! ```
//! use hopfield::{patterns, Simulator, SimulatorConfig, TrainingMethod};
//!
//! let config = SimulatorConfig::default()
//!     .with_noise_level(0.1)
//!     .with_update_fraction(1.0)
//!     .with_seed(42);
//! let mut sim = Simulator::new(config).unwrap();
//!
//! sim.initialize_with_noise(&patterns::reference_set(), TrainingMethod::Hebbian, &patterns::diamond())
//!     .unwrap();
//! let status = sim.run_to_completion().unwrap();
//!
//! assert!(status.is_terminal());
//! assert!(sim.history().accepted_steps() <= 10);
//! println!("{}", sim.current_image().unwrap());
//! ```
//!
//! ## Energy of a stored pattern
//!
//! ```
//! use hopfield::{patterns, train, NetworkState, PatternCodec, TrainingMethod};
//!
//! let codec = PatternCodec::default();
//! let w = train(&codec, &patterns::reference_set(), TrainingMethod::Hebbian).unwrap();
//!
//! let stored = NetworkState::from_image(&codec, &patterns::square()).unwrap();
//! let blank = NetworkState::from_image(&codec, &hopfield::Image::blank(10)).unwrap();
//! assert!(stored.energy(&w).unwrap() < blank.energy(&w).unwrap());
//! ```
//!
//! # Randomness
//!
//! The neuron visiting order comes from an [`utils::IndexSource`]. Any
//! seeded `rand::Rng` works; [`utils::ScriptedIndices`] replays a fixed
//! sequence for exact tests.

// Module declarations
pub mod error;
pub mod utils;

// Data model
pub mod codec;
pub mod image;
pub mod weights;

// Core engine
pub mod dynamics;
pub mod energy;
pub mod state;
pub mod trainer;

// Orchestration
pub mod autorun;
pub mod config;
pub mod history;
pub mod patterns;
pub mod simulator;

#[cfg(feature = "wasm")]
pub mod wasm_interface;

// Re-exports for convenient access
pub use error::{HopfieldError, Result};

pub use codec::PatternCodec;
pub use image::{BipolarVector, Image, DEFAULT_SIDE};
pub use weights::WeightMatrix;

pub use dynamics::Sweep;
pub use energy::{energy, local_field};
pub use state::NetworkState;
pub use trainer::{train, HebbianRule, PseudoInverseRule, TrainingMethod, TrainingRule};

pub use autorun::AutoRunner;
pub use config::SimulatorConfig;
pub use history::RunHistory;
pub use simulator::{Simulator, SimulatorStatus, StepOutcome};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Hopfield";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Hopfield"));
        assert!(ver.contains(VERSION));
    }

    #[test]
    fn test_re_exports() {
        let codec = PatternCodec::default();
        let _w = WeightMatrix::zeros(codec.num_neurons());
        let _result: Result<()> = Ok(());
        assert_eq!(DEFAULT_SIDE, 10);
    }
}
