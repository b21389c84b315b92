//! Trainer - builds the weight matrix from stored patterns.
//!
//! Two interchangeable rules share the [`TrainingRule`] trait:
//!
//! - [`HebbianRule`]: accumulate `p[i] * p[j]` over all patterns, then divide
//!   every entry by the pattern count once.
//! - [`PseudoInverseRule`]: accumulate `p[i] * p[j] / count` per pattern.
//!   This is a named reparameterization of the Hebbian rule, not a
//!   Moore-Penrose pseudo-inverse; both produce the same matrix up to
//!   floating-point rounding.
//!
//! Both rules skip the diagonal, so `W[i][i] == 0`, and both are symmetric
//! because each contribution is an outer product of a bipolar vector with
//! itself.
//!
//! # Examples
//!
//! ```
//! use hopfield::{patterns, train, PatternCodec, TrainingMethod};
//!
//! let codec = PatternCodec::default();
//! let w = train(&codec, &patterns::reference_set(), TrainingMethod::Hebbian).unwrap();
//!
//! assert_eq!(w.num_neurons(), 100);
//! assert_eq!(w.get(0, 0), 0.0);
//! assert!(w.is_symmetric());
//! ```

use crate::{BipolarVector, HopfieldError, Image, PatternCodec, Result, WeightMatrix};
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A rule that turns a stored pattern set into a weight matrix.
pub trait TrainingRule {
    /// Canonical rule name.
    fn name(&self) -> &'static str;

    /// Build `W` from `patterns`. Fails with
    /// [`HopfieldError::EmptyTrainingSet`] when `patterns` is empty and with
    /// [`HopfieldError::Shape`] when a pattern does not fit `codec`.
    fn train(&self, codec: &PatternCodec, patterns: &[Image]) -> Result<WeightMatrix>;
}

/// Sum of outer products, normalized once by the pattern count.
#[derive(Debug, Clone, Copy, Default)]
pub struct HebbianRule;

/// Sum of outer products, each pre-divided by the pattern count.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoInverseRule;

fn encode_all(codec: &PatternCodec, patterns: &[Image]) -> Result<Vec<BipolarVector>> {
    if patterns.is_empty() {
        return Err(HopfieldError::EmptyTrainingSet);
    }
    patterns.iter().map(|p| codec.encode(p)).collect()
}

impl TrainingRule for HebbianRule {
    fn name(&self) -> &'static str {
        "hebbian"
    }

    fn train(&self, codec: &PatternCodec, patterns: &[Image]) -> Result<WeightMatrix> {
        let encoded = encode_all(codec, patterns)?;
        let n = codec.num_neurons();
        let mut w = WeightMatrix::zeros(n);

        for p in &encoded {
            for (i, j) in iproduct!(0..n, 0..n).filter(|(i, j)| i != j) {
                w.add(i, j, f64::from(p.get(i) * p.get(j)));
            }
        }
        w.divide(encoded.len() as f64);

        Ok(w)
    }
}

impl TrainingRule for PseudoInverseRule {
    fn name(&self) -> &'static str {
        "pseudoinverse-style"
    }

    fn train(&self, codec: &PatternCodec, patterns: &[Image]) -> Result<WeightMatrix> {
        let encoded = encode_all(codec, patterns)?;
        let n = codec.num_neurons();
        let count = encoded.len() as f64;
        let mut w = WeightMatrix::zeros(n);

        for p in &encoded {
            for (i, j) in iproduct!(0..n, 0..n).filter(|(i, j)| i != j) {
                w.add(i, j, f64::from(p.get(i) * p.get(j)) / count);
            }
        }

        Ok(w)
    }
}

/// Selector for the training rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingMethod {
    /// [`HebbianRule`]
    #[default]
    Hebbian,
    /// [`PseudoInverseRule`]
    PseudoinverseStyle,
}

impl TrainingMethod {
    /// The rule implementing this method.
    pub fn rule(self) -> &'static dyn TrainingRule {
        match self {
            TrainingMethod::Hebbian => &HebbianRule,
            TrainingMethod::PseudoinverseStyle => &PseudoInverseRule,
        }
    }
}

impl fmt::Display for TrainingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule().name())
    }
}

impl FromStr for TrainingMethod {
    type Err = HopfieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hebbian" | "hebb" => Ok(TrainingMethod::Hebbian),
            "pseudoinverse-style" | "pseudoinverse" => Ok(TrainingMethod::PseudoinverseStyle),
            other => Err(HopfieldError::InvalidParameter(format!(
                "unknown training method '{}'",
                other
            ))),
        }
    }
}

/// Train a weight matrix with the selected method.
pub fn train(codec: &PatternCodec, patterns: &[Image], method: TrainingMethod) -> Result<WeightMatrix> {
    let w = method.rule().train(codec, patterns)?;
    log::debug!(
        "trained {} weights for {} neurons from {} patterns",
        method,
        w.num_neurons(),
        patterns.len()
    );
    Ok(w)
}
