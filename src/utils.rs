//! Randomness helpers.
//!
//! Every random choice made by the network goes through the [`IndexSource`]
//! trait so callers can swap the seeded RNG for a fixed script in tests.

use rand::Rng;

/// Source of uniformly distributed indices.
///
/// Any `rand::Rng` is an `IndexSource`. [`ScriptedIndices`] replays a fixed
/// sequence instead.
pub trait IndexSource {
    /// Return an index in `[0, bound)`. `bound` is always non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of raw draws, each reduced modulo the requested
/// bound. Wraps around when the script runs out.
///
/// # Examples
///
/// ```
/// use hopfield::utils::{IndexSource, ScriptedIndices};
///
/// let mut src = ScriptedIndices::new(vec![0, 7]);
/// assert_eq!(src.next_index(5), 0);
/// assert_eq!(src.next_index(5), 2);
/// assert_eq!(src.next_index(5), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedIndices {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndices {
    /// Create a source from a script. An empty script always yields 0.
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A script that always picks the first remaining pool entry, which
    /// visits neurons in ascending index order.
    pub fn in_order() -> Self {
        Self::new(Vec::new())
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, bound: usize) -> usize {
        let raw = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        raw % bound
    }
}

/// Remove and return one entry of `pool` chosen by `source`.
///
/// The remaining entries keep their relative order, so a scripted source
/// addresses positions in a predictable list. Returns `None` on an empty
/// pool.
pub fn draw_from_pool<S: IndexSource + ?Sized>(pool: &mut Vec<usize>, source: &mut S) -> Option<usize> {
    if pool.is_empty() {
        return None;
    }
    let pos = source.next_index(pool.len());
    Some(pool.remove(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rng_index_in_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let i = rng.next_index(7);
            assert!(i < 7);
        }
    }

    #[test]
    fn test_scripted_wraps() {
        let mut src = ScriptedIndices::new(vec![3, 1]);
        assert_eq!(src.next_index(10), 3);
        assert_eq!(src.next_index(10), 1);
        assert_eq!(src.next_index(10), 3);
        assert_eq!(src.draws(), 3);
    }

    #[test]
    fn test_draw_from_pool_without_replacement() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut pool: Vec<usize> = (0..20).collect();
        let mut drawn = Vec::new();

        while let Some(i) = draw_from_pool(&mut pool, &mut rng) {
            drawn.push(i);
        }

        drawn.sort();
        assert_eq!(drawn, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_draw_from_pool_preserves_order() {
        let mut src = ScriptedIndices::new(vec![1]);
        let mut pool = vec![10, 11, 12, 13];

        assert_eq!(draw_from_pool(&mut pool, &mut src), Some(11));
        assert_eq!(pool, vec![10, 12, 13]);
        assert_eq!(draw_from_pool(&mut pool, &mut src), Some(12));
        assert_eq!(pool, vec![10, 13]);
    }

    #[test]
    fn test_draw_from_empty_pool() {
        let mut src = ScriptedIndices::in_order();
        let mut pool: Vec<usize> = Vec::new();
        assert_eq!(draw_from_pool(&mut pool, &mut src), None);
        assert_eq!(src.draws(), 0);
    }
}
