//! NetworkState - the current bipolar state plus its image view.

use crate::{energy, BipolarVector, HopfieldError, Image, PatternCodec, Result, WeightMatrix};
use serde::{Deserialize, Serialize};

/// Current network state.
///
/// Holds the bipolar vector the dynamics operate on and the decoded image
/// handed to display code. The two views are always kept in sync; equality
/// compares the bipolar vectors element-wise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkState {
    vector: BipolarVector,
    image: Image,
}

impl NetworkState {
    /// Encode `image` into a new state.
    pub fn from_image(codec: &PatternCodec, image: &Image) -> Result<Self> {
        Ok(Self {
            vector: codec.encode(image)?,
            image: image.clone(),
        })
    }

    /// Wrap a bipolar vector, decoding its image view.
    pub fn from_vector(codec: &PatternCodec, vector: BipolarVector) -> Result<Self> {
        let image = codec.decode(&vector)?;
        Ok(Self { vector, image })
    }

    /// A new state on the same grid holding `vector`.
    pub fn with_vector(&self, vector: BipolarVector) -> Result<Self> {
        Self::from_vector(&PatternCodec::new(self.image.side()), vector)
    }

    /// Bipolar view.
    #[inline]
    pub fn vector(&self) -> &BipolarVector {
        &self.vector
    }

    /// Image view.
    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Number of neurons.
    #[inline]
    pub fn len(&self) -> usize {
        self.vector.len()
    }

    /// True for a zero-neuron state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }

    /// Energy of this state under `weights`.
    pub fn energy(&self, weights: &WeightMatrix) -> Result<f64> {
        energy::energy(&self.vector, weights)
    }

    /// Number of neurons whose sign differs from `other`.
    pub fn hamming_distance(&self, other: &BipolarVector) -> Result<usize> {
        self.check_len(other)?;
        Ok(self
            .vector
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Normalized overlap `(1/n) * sum_i s[i] * p[i]`, in [-1, 1]. A value of
    /// 1 means the state equals `pattern`, -1 means it is the inverse.
    pub fn overlap(&self, pattern: &BipolarVector) -> Result<f64> {
        self.check_len(pattern)?;
        if self.is_empty() {
            return Ok(0.0);
        }
        let dot: f64 = self.vector.iter_f64().zip(pattern.iter_f64()).map(|(a, b)| a * b).sum();
        Ok(dot / self.len() as f64)
    }

    fn check_len(&self, other: &BipolarVector) -> Result<()> {
        if other.len() != self.len() {
            return Err(HopfieldError::Shape {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }
}

impl PartialEq for NetworkState {
    fn eq(&self, other: &Self) -> bool {
        self.vector == other.vector
    }
}

impl Eq for NetworkState {}
