//! WeightMatrix - dense symmetric synaptic weights.
//!
//! Stored as a flat row-major `Vec<f64>` so a row is a contiguous slice,
//! which keeps the local-field sum in [`crate::energy::local_field`] a
//! straight dot product.

use crate::{HopfieldError, Result};
use serde::{Deserialize, Serialize};

/// `n x n` matrix of real-valued weights with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMatrix {
    n: usize,
    data: Vec<f64>,
}

impl WeightMatrix {
    /// Create an all-zero `n x n` matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Build from nested rows. Every row must have `rows.len()` entries and
    /// every diagonal entry must be zero.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(HopfieldError::Shape {
                expected: n,
                actual: bad.len(),
            });
        }
        let w = Self {
            n,
            data: rows.into_iter().flatten().collect(),
        };
        if (0..n).any(|i| w.get(i, i) != 0.0) {
            return Err(HopfieldError::InvalidParameter(
                "weight matrix diagonal must be zero".into(),
            ));
        }
        Ok(w)
    }

    /// Number of neurons.
    #[inline]
    pub fn num_neurons(&self) -> usize {
        self.n
    }

    /// Weight from neuron `j` onto neuron `i`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.n && j < self.n);
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    pub(crate) fn add(&mut self, i: usize, j: usize, delta: f64) {
        self.data[i * self.n + j] += delta;
    }

    pub(crate) fn divide(&mut self, divisor: f64) {
        for w in &mut self.data {
            *w /= divisor;
        }
    }

    /// True when `W[i][j] == W[j][i]` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| ((i + 1)..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// True when every diagonal entry is zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.n).all(|i| self.get(i, i) == 0.0)
    }

    /// Fail with [`HopfieldError::Shape`] unless the matrix drives `len`
    /// neurons.
    pub(crate) fn check_len(&self, len: usize) -> Result<()> {
        if len != self.n {
            return Err(HopfieldError::Shape {
                expected: self.n,
                actual: len,
            });
        }
        Ok(())
    }
}
