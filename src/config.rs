//! Simulator configuration.
//!
//! [`SimulatorConfig`] collects the knobs an external front end exposes:
//! grid size, iteration cap, sweep fraction, demo noise level, auto-run
//! cadence and RNG seed. It serializes to JSON so a front end can persist
//! its settings.
//!
//! # Example
//!
//! ```
//! use hopfield::SimulatorConfig;
//!
//! let config = SimulatorConfig::default()
//!     .with_max_iterations(25)
//!     .with_update_fraction(1.0);
//! config.validate().unwrap();
//!
//! let json = config.to_json().unwrap();
//! let restored = SimulatorConfig::from_json(&json).unwrap();
//! assert_eq!(restored, config);
//! ```

use crate::dynamics::validate_update_fraction;
use crate::{HopfieldError, Result, DEFAULT_SIDE};
use serde::{Deserialize, Serialize};

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Default fraction of neurons updated per sweep.
pub const DEFAULT_UPDATE_FRACTION: f64 = 0.5;

/// Default probability of flipping each pixel of a demo input.
pub const DEFAULT_NOISE_LEVEL: f64 = 0.25;

/// Default auto-run delay between steps, in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 500;

/// Configuration for a [`crate::Simulator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Grid side length (`n = side * side` neurons)
    pub side: usize,
    /// Maximum number of accepted steps per run
    pub max_iterations: usize,
    /// Fraction of neurons updated per sweep, in (0, 1]
    pub update_fraction: f64,
    /// Per-pixel flip probability for generated inputs, in [0, 1]
    pub noise_level: f64,
    /// Auto-run cadence
    pub step_delay_ms: u64,
    /// Seed for the simulator RNG
    pub seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            update_fraction: DEFAULT_UPDATE_FRACTION,
            noise_level: DEFAULT_NOISE_LEVEL,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            seed: 0,
        }
    }
}

impl SimulatorConfig {
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_update_fraction(mut self, update_fraction: f64) -> Self {
        self.update_fraction = update_fraction;
        self
    }

    pub fn with_noise_level(mut self, noise_level: f64) -> Self {
        self.noise_level = noise_level;
        self
    }

    pub fn with_step_delay_ms(mut self, step_delay_ms: u64) -> Self {
        self.step_delay_ms = step_delay_ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.side == 0 {
            return Err(HopfieldError::InvalidParameter("side must be at least 1".into()));
        }
        if self.max_iterations == 0 {
            return Err(HopfieldError::InvalidParameter(
                "max_iterations must be at least 1".into(),
            ));
        }
        validate_update_fraction(self.update_fraction)?;
        if !(0.0..=1.0).contains(&self.noise_level) {
            return Err(HopfieldError::InvalidParameter(format!(
                "noise_level must be in [0, 1], got {}",
                self.noise_level
            )));
        }
        Ok(())
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
