//! PatternCodec - converts between images and bipolar state vectors.
//!
//! Encoding flattens an [`Image`] row-major (`idx = row * side + col`) and
//! maps 0 to -1 and 1 to +1. Decoding is the exact inverse, so
//! `decode(encode(x)) == x` for every image of the codec's side length.

use crate::{BipolarVector, HopfieldError, Image, Result, DEFAULT_SIDE};
use serde::{Deserialize, Serialize};

/// Codec for square images of a fixed side length.
///
/// # Examples
///
/// ```
/// use hopfield::{Image, PatternCodec};
///
/// let codec = PatternCodec::new(2);
/// let img = Image::from_rows(vec![vec![1, 0], vec![0, 0]]).unwrap();
///
/// let v = codec.encode(&img).unwrap();
/// assert_eq!(v.as_slice(), &[1, -1, -1, -1]);
/// assert_eq!(codec.decode(&v).unwrap(), img);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCodec {
    side: usize,
}

impl PatternCodec {
    /// Create a codec for `side x side` images.
    pub fn new(side: usize) -> Self {
        Self { side }
    }

    /// Grid side length.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of neurons (`side * side`).
    #[inline]
    pub fn num_neurons(&self) -> usize {
        self.side * self.side
    }

    /// Encode an image into a bipolar vector.
    ///
    /// Fails with [`HopfieldError::Shape`] if the image side differs from the
    /// codec side.
    pub fn encode(&self, image: &Image) -> Result<BipolarVector> {
        if image.side() != self.side {
            return Err(HopfieldError::Shape {
                expected: self.side,
                actual: image.side(),
            });
        }
        Ok(BipolarVector::from_signs(image.cells().iter().map(|&v| v != 0)))
    }

    /// Decode a bipolar vector back into an image.
    ///
    /// Fails with [`HopfieldError::Shape`] if the vector length is not
    /// `side * side`.
    pub fn decode(&self, vector: &BipolarVector) -> Result<Image> {
        if vector.len() != self.num_neurons() {
            return Err(HopfieldError::Shape {
                expected: self.num_neurons(),
                actual: vector.len(),
            });
        }
        Image::from_cells(
            self.side,
            vector.as_slice().iter().map(|&v| u8::from(v > 0)).collect(),
        )
    }
}

impl Default for PatternCodec {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE)
    }
}
