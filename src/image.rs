//! Image and BipolarVector - the two views of a network pattern.
//!
//! An [`Image`] is a square grid of binary cells stored row-major, top row
//! first. A [`BipolarVector`] is the flat {-1, +1} form the weight and energy
//! formulas work on. Conversion between the two lives in [`crate::codec`].

use crate::{HopfieldError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the reference scenario grid.
pub const DEFAULT_SIDE: usize = 10;

/// Square binary image with cells in {0, 1}.
///
/// # Examples
///
/// ```
/// use hopfield::Image;
///
/// let img = Image::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
/// assert_eq!(img.side(), 2);
/// assert_eq!(img.get(1, 1), 1);
/// assert_eq!(img.num_set(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    side: usize,
    cells: Vec<u8>,
}

impl Image {
    /// Create an all-zero image of the given side length.
    pub fn blank(side: usize) -> Self {
        Self {
            side,
            cells: vec![0; side * side],
        }
    }

    /// Build an image from nested rows.
    ///
    /// Fails with [`HopfieldError::Shape`] if any row length differs from the
    /// row count, and with [`HopfieldError::InvalidParameter`] if a cell is
    /// not 0 or 1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let side = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != side) {
            return Err(HopfieldError::Shape {
                expected: side,
                actual: bad.len(),
            });
        }
        Self::from_cells(side, rows.into_iter().flatten().collect())
    }

    /// Build an image from row-major cells.
    pub fn from_cells(side: usize, cells: Vec<u8>) -> Result<Self> {
        if cells.len() != side * side {
            return Err(HopfieldError::Shape {
                expected: side * side,
                actual: cells.len(),
            });
        }
        if let Some(&v) = cells.iter().find(|&&v| v > 1) {
            return Err(HopfieldError::InvalidParameter(format!(
                "pixel value {} is not binary",
                v
            )));
        }
        Ok(Self { side, cells })
    }

    /// Side length of the grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side * side`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-sized image.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not less than the side length.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.check_coords(row, col);
        self.cells[row * self.side + col]
    }

    /// Set cell at (`row`, `col`) to 0 or 1 (any non-zero value stores 1).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not less than the side length.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.check_coords(row, col);
        self.cells[row * self.side + col] = u8::from(value != 0);
    }

    #[inline]
    fn check_coords(&self, row: usize, col: usize) {
        assert!(
            row < self.side && col < self.side,
            "cell ({}, {}) out of bounds for {}x{} image",
            row,
            col,
            self.side,
            self.side
        );
    }

    /// Invert the cell at flat index `idx`.
    #[inline]
    pub fn flip(&mut self, idx: usize) {
        self.cells[idx] ^= 1;
    }

    /// Row-major cell slice.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks(self.side.max(1))
    }

    /// Number of cells set to 1.
    pub fn num_set(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// Number of cells that differ from `other`.
    pub fn hamming_distance(&self, other: &Image) -> Result<usize> {
        if self.side != other.side {
            return Err(HopfieldError::Shape {
                expected: self.side,
                actual: other.side,
            });
        }
        Ok(self
            .cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count())
    }
}

impl fmt::Display for Image {
    /// Renders `#` for 1 and `.` for 0, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows()
            .map(|row| row.iter().map(|&v| if v == 1 { '#' } else { '.' }).collect::<String>())
            .join("\n");
        f.write_str(&text)
    }
}

/// Flat bipolar state vector with entries in {-1, +1}.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BipolarVector(Vec<i8>);

impl BipolarVector {
    /// Wrap raw values.
    ///
    /// Fails with [`HopfieldError::InvalidParameter`] if any value is not
    /// -1 or +1. Binary {0, 1} data goes through [`crate::PatternCodec`].
    pub fn new(values: Vec<i8>) -> Result<Self> {
        if let Some((i, v)) = values.iter().enumerate().find(|&(_, &v)| v != 1 && v != -1) {
            return Err(HopfieldError::InvalidParameter(format!(
                "neuron {} has value {}, expected -1 or +1",
                i, v
            )));
        }
        Ok(Self(values))
    }

    /// Build a vector from signs: `true` is +1, `false` is -1.
    pub fn from_signs<I: IntoIterator<Item = bool>>(signs: I) -> Self {
        Self(signs.into_iter().map(|s| if s { 1 } else { -1 }).collect())
    }

    /// Number of neurons.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the vector holds no neurons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of neuron `i` (+1 or -1).
    #[inline]
    pub fn get(&self, i: usize) -> i8 {
        self.0[i]
    }

    /// Set neuron `i` from the sign of `positive`.
    #[inline]
    pub fn set(&mut self, i: usize, positive: bool) {
        self.0[i] = if positive { 1 } else { -1 };
    }

    /// Values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }

    /// Iterate over neuron values as `f64`, as used by the weight sums.
    pub fn iter_f64(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|&v| f64::from(v))
    }
}
