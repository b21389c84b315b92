//! Dynamics - one asynchronous update sweep.
//!
//! # Algorithm
//!
//! 1. `k = floor(n * update_fraction)` neurons are updated per sweep.
//! 2. A working copy `next` of the current vector is the only buffer; every
//!    update reads from and writes into it, so a neuron updated later in the
//!    sweep sees the updates made earlier in the same sweep.
//! 3. `k` times: draw a neuron uniformly from those not yet chosen this
//!    sweep, compute its local field `sum_j W[i][j] * next[j]` and set it to
//!    +1 when the field is `>= 0`, otherwise -1. A zero field always yields
//!    +1.
//!
//! The sweep is pure given the index source: the same `(state, W,
//! update_fraction)` and the same draws always produce the same result.

use crate::utils::{draw_from_pool, IndexSource};
use crate::{energy::local_field, HopfieldError, NetworkState, Result, WeightMatrix};

/// Result of one sweep, with bookkeeping for logging and tests.
#[derive(Debug, Clone)]
pub struct Sweep {
    /// State after the sweep.
    pub state: NetworkState,
    /// Neurons visited, in visiting order.
    pub visited: Vec<usize>,
    /// Number of visited neurons whose sign changed.
    pub flips: usize,
}

/// Number of neurons updated per sweep: `floor(n * update_fraction)`.
pub fn neurons_per_sweep(n: usize, update_fraction: f64) -> usize {
    ((n as f64) * update_fraction).floor() as usize
}

/// Fail unless `update_fraction` lies in (0, 1].
pub fn validate_update_fraction(update_fraction: f64) -> Result<()> {
    if !(update_fraction > 0.0 && update_fraction <= 1.0) {
        return Err(HopfieldError::InvalidParameter(format!(
            "update_fraction must be in (0, 1], got {}",
            update_fraction
        )));
    }
    Ok(())
}

/// Run one sweep and report which neurons were visited.
pub fn sweep<S: IndexSource + ?Sized>(
    state: &NetworkState,
    weights: &WeightMatrix,
    update_fraction: f64,
    source: &mut S,
) -> Result<Sweep> {
    validate_update_fraction(update_fraction)?;
    weights.check_len(state.len())?;

    let n = state.len();
    let k = neurons_per_sweep(n, update_fraction);
    let mut next = state.vector().clone();
    let mut pool: Vec<usize> = (0..n).collect();
    let mut visited = Vec::with_capacity(k);
    let mut flips = 0;

    for _ in 0..k {
        let Some(i) = draw_from_pool(&mut pool, source) else {
            break;
        };
        let before = next.get(i);
        next.set(i, local_field(weights, &next, i) >= 0.0);
        if next.get(i) != before {
            flips += 1;
        }
        visited.push(i);
    }

    Ok(Sweep {
        state: state.with_vector(next)?,
        visited,
        flips,
    })
}

/// Run one sweep and return the new state.
///
/// # Examples
///
/// ```
/// use hopfield::{dynamics, patterns, train, NetworkState, PatternCodec, TrainingMethod};
/// use rand::SeedableRng;
///
/// let codec = PatternCodec::default();
/// let w = train(&codec, &patterns::reference_set(), TrainingMethod::Hebbian).unwrap();
/// let start = NetworkState::from_image(&codec, &patterns::diamond()).unwrap();
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let next = dynamics::step(&start, &w, 1.0, &mut rng).unwrap();
/// assert_eq!(next, start);
/// ```
pub fn step<S: IndexSource + ?Sized>(
    state: &NetworkState,
    weights: &WeightMatrix,
    update_fraction: f64,
    source: &mut S,
) -> Result<NetworkState> {
    Ok(sweep(state, weights, update_fraction, source)?.state)
}
