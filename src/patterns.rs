//! Reference patterns and demo input generation.
//!
//! The reference scenario stores two 10x10 shapes, a hollow square and a
//! hollow diamond. Both carry the same fixed three-pixel marker in the
//! bottom-left corner at (8,0), (9,0) and (9,1).

use crate::{HopfieldError, Image, Result};
use rand::Rng;

fn from_static(rows: [[u8; 10]; 10]) -> Image {
    let cells = rows.iter().flatten().copied().collect();
    Image::from_cells(10, cells).expect("reference pattern is a valid 10x10 image")
}

/// Hollow square with the corner marker.
pub fn square() -> Image {
    from_static([
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 1, 1, 1, 1, 1, 1, 0, 0],
        [0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
        [0, 0, 1, 1, 1, 1, 1, 1, 0, 0],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    ])
}

/// Hollow diamond with the corner marker.
pub fn diamond() -> Image {
    from_static([
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
        [0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
        [0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    ])
}

/// The stored pattern set of the reference scenario: `[square, diamond]`.
pub fn reference_set() -> Vec<Image> {
    vec![square(), diamond()]
}

/// Copy `image`, flipping each pixel independently with probability `level`.
///
/// # Examples
///
/// ```
/// use hopfield::patterns;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let clean = patterns::diamond();
///
/// let same = patterns::add_noise(&clean, 0.0, &mut rng).unwrap();
/// assert_eq!(same, clean);
///
/// let inverted = patterns::add_noise(&clean, 1.0, &mut rng).unwrap();
/// assert_eq!(inverted.hamming_distance(&clean).unwrap(), 100);
/// ```
pub fn add_noise<R: Rng + ?Sized>(image: &Image, level: f64, rng: &mut R) -> Result<Image> {
    if !(0.0..=1.0).contains(&level) {
        return Err(HopfieldError::InvalidParameter(format!(
            "noise level must be in [0, 1], got {}",
            level
        )));
    }
    let mut noisy = image.clone();
    for idx in 0..noisy.len() {
        if rng.gen_bool(level) {
            noisy.flip(idx);
        }
    }
    Ok(noisy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_shapes() {
        assert_eq!(square().num_set(), 23);
        assert_eq!(diamond().num_set(), 15);
        assert_eq!(square().hamming_distance(&diamond()).unwrap(), 16);
    }

    #[test]
    fn test_shared_marker() {
        for img in reference_set() {
            assert_eq!(img.get(8, 0), 1);
            assert_eq!(img.get(9, 0), 1);
            assert_eq!(img.get(9, 1), 1);
        }
    }

    #[test]
    fn test_noise_rate() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let clean = Image::blank(100);
        let noisy = add_noise(&clean, 0.25, &mut rng).unwrap();
        let flipped = noisy.num_set();
        // 10000 pixels at 25%: expect ~2500
        assert!(flipped > 2200 && flipped < 2800, "flipped: {}", flipped);
    }

    #[test]
    fn test_noise_level_validated() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert!(add_noise(&square(), 1.5, &mut rng).is_err());
    }
}
