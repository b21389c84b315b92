//! Energy functional and local field.
//!
//! `E(s) = -1/2 * sum_i sum_j W[i][j] * s[i] * s[j]`, summed over the full
//! matrix in ascending index order. The diagonal contributes nothing because
//! `W[i][i] == 0`. Both functions recompute from scratch on every call.

use crate::{BipolarVector, Result, WeightMatrix};

/// Net input to neuron `i`: `sum_j W[i][j] * s[j]`, accumulated in ascending
/// `j` order.
#[inline]
pub fn local_field(weights: &WeightMatrix, state: &BipolarVector, i: usize) -> f64 {
    weights
        .row(i)
        .iter()
        .zip(state.iter_f64())
        .map(|(w, s)| w * s)
        .sum()
}

/// Hopfield energy of `state` under `weights`.
///
/// Fails with [`crate::HopfieldError::Shape`] if the state length differs
/// from the matrix size.
///
/// # Examples
///
/// ```
/// use hopfield::{energy, BipolarVector, WeightMatrix};
///
/// let w = WeightMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// let aligned = BipolarVector::new(vec![1, 1]).unwrap();
/// let opposed = BipolarVector::new(vec![1, -1]).unwrap();
///
/// assert_eq!(energy(&aligned, &w).unwrap(), -1.0);
/// assert_eq!(energy(&opposed, &w).unwrap(), 1.0);
/// ```
pub fn energy(state: &BipolarVector, weights: &WeightMatrix) -> Result<f64> {
    weights.check_len(state.len())?;
    let total: f64 = state
        .iter_f64()
        .enumerate()
        .map(|(i, si)| si * local_field(weights, state, i))
        .sum();
    Ok(-0.5 * total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HopfieldError;

    #[test]
    fn test_local_field() {
        let w = WeightMatrix::from_rows(vec![
            vec![0.0, 1.0, -1.0],
            vec![1.0, 0.0, 0.5],
            vec![-1.0, 0.5, 0.0],
        ])
        .unwrap();
        let s = BipolarVector::new(vec![1, -1, -1]).unwrap();
        assert_eq!(local_field(&w, &s, 0), 0.0);
        assert_eq!(local_field(&w, &s, 1), 0.5);
        assert_eq!(local_field(&w, &s, 2), -1.5);
    }

    #[test]
    fn test_energy_zero_weights() {
        let w = WeightMatrix::zeros(4);
        let s = BipolarVector::new(vec![1, -1, 1, -1]).unwrap();
        assert_eq!(energy(&s, &w).unwrap(), 0.0);
    }

    #[test]
    fn test_energy_shape_mismatch() {
        let w = WeightMatrix::zeros(4);
        let s = BipolarVector::new(vec![1, -1]).unwrap();
        assert!(matches!(
            energy(&s, &w),
            Err(HopfieldError::Shape { expected: 4, actual: 2 })
        ));
    }
}
