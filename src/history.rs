//! RunHistory - the images accepted during one simulator run.
//!
//! The history is reset whenever a new run is seeded and can be exported to
//! JSON for display or inspection.

use crate::{Image, Result};
use serde::{Deserialize, Serialize};

/// Append-only record of the images a run has accepted.
///
/// Entry 0 is the initial image; every accepted sweep appends one more. A
/// sweep that produces no change is not recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    entries: Vec<Image>,
}

impl RunHistory {
    /// Create an empty history, as held before the first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a history seeded with `initial`.
    pub fn seeded(initial: Image) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Record the image of an accepted step.
    pub fn push(&mut self, image: Image) {
        self.entries.push(image);
    }

    /// All recorded images, oldest first.
    pub fn entries(&self) -> &[Image] {
        &self.entries
    }

    /// The seed entry, if any.
    pub fn initial(&self) -> Option<&Image> {
        self.entries.first()
    }

    /// The most recently accepted image, or the seed if none.
    pub fn latest(&self) -> Option<&Image> {
        self.entries.last()
    }

    /// Number of entries, including the seed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before any run has been seeded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of accepted steps, excluding the seed entry.
    pub fn accepted_steps(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Export history to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import history from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_counts() {
        let mut h = RunHistory::seeded(Image::blank(2));
        assert_eq!(h.len(), 1);
        assert_eq!(h.accepted_steps(), 0);

        let mut next = Image::blank(2);
        next.flip(3);
        h.push(next.clone());
        assert_eq!(h.accepted_steps(), 1);
        assert_eq!(h.latest(), Some(&next));
        assert_eq!(h.initial(), Some(&Image::blank(2)));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut h = RunHistory::seeded(Image::blank(2));
        h.push(Image::from_cells(2, vec![1, 0, 0, 1]).unwrap());

        let json = h.to_json().unwrap();
        assert_eq!(RunHistory::from_json(&json).unwrap(), h);
    }

    #[test]
    fn test_empty() {
        let h = RunHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.accepted_steps(), 0);
        assert!(h.initial().is_none());
    }
}
