//! Tests for the training rules.
//!
//! Tests cover:
//! - Zero diagonal and symmetry for both rules
//! - Normalization by pattern count
//! - Agreement between the Hebbian and pseudo-inverse-style rules
//! - Empty training set and shape errors

use approx::assert_relative_eq;
use hopfield::{
    patterns, train, HebbianRule, HopfieldError, Image, PatternCodec, PseudoInverseRule,
    TrainingMethod, TrainingRule,
};
use proptest::prelude::*;

#[test]
fn test_reference_weights_zero_diagonal() {
    let codec = PatternCodec::default();
    for method in [TrainingMethod::Hebbian, TrainingMethod::PseudoinverseStyle] {
        let w = train(&codec, &patterns::reference_set(), method).unwrap();
        assert!(w.has_zero_diagonal(), "{} diagonal", method);
        assert!(w.is_symmetric(), "{} symmetry", method);
    }
}

#[test]
fn test_reference_weights_values() {
    let codec = PatternCodec::default();
    let w = train(&codec, &patterns::reference_set(), TrainingMethod::Hebbian).unwrap();

    // Both patterns are 0 at pixels 0 and 1: both terms +1, averaged to 1.
    assert_eq!(w.get(0, 1), 1.0);
    // Marker pixel 80 is 1 in both, pixel 0 is 0 in both: -1.
    assert_eq!(w.get(0, 80), -1.0);
    // Pixel 22 is set only in the square, so the two terms cancel.
    assert_eq!(w.get(22, 0), 0.0);
}

#[test]
fn test_weights_bounded_by_one() {
    let codec = PatternCodec::default();
    let w = train(&codec, &patterns::reference_set(), TrainingMethod::Hebbian).unwrap();
    for i in 0..w.num_neurons() {
        for &x in w.row(i) {
            assert!((-1.0..=1.0).contains(&x));
        }
    }
}

#[test]
fn test_rules_match_on_reference() {
    let codec = PatternCodec::default();
    let set = patterns::reference_set();
    let hebb = HebbianRule.train(&codec, &set).unwrap();
    let pinv = PseudoInverseRule.train(&codec, &set).unwrap();
    assert_eq!(hebb, pinv);
}

#[test]
fn test_rules_close_on_three_patterns() {
    let codec = PatternCodec::default();
    let mut set = patterns::reference_set();
    set.push(Image::blank(10));

    let hebb = HebbianRule.train(&codec, &set).unwrap();
    let pinv = PseudoInverseRule.train(&codec, &set).unwrap();
    for i in 0..100 {
        for j in 0..100 {
            assert_relative_eq!(hebb.get(i, j), pinv.get(i, j), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_empty_training_set() {
    let codec = PatternCodec::default();
    for method in [TrainingMethod::Hebbian, TrainingMethod::PseudoinverseStyle] {
        assert!(matches!(
            train(&codec, &[], method),
            Err(HopfieldError::EmptyTrainingSet)
        ));
    }
}

#[test]
fn test_wrong_size_pattern() {
    let codec = PatternCodec::default();
    let set = vec![patterns::square(), Image::blank(4)];
    assert!(matches!(
        train(&codec, &set, TrainingMethod::Hebbian),
        Err(HopfieldError::Shape { expected: 10, actual: 4 })
    ));
}

#[test]
fn test_patterns_not_mutated() {
    let codec = PatternCodec::default();
    let set = patterns::reference_set();
    let copy = set.clone();
    train(&codec, &set, TrainingMethod::PseudoinverseStyle).unwrap();
    assert_eq!(set, copy);
}

// =============================================================================
// Property-Based Tests
// =============================================================================

fn arb_patterns(side: usize) -> impl Strategy<Value = Vec<Image>> {
    prop::collection::vec(
        prop::collection::vec(0..=1u8, side * side)
            .prop_map(move |cells| Image::from_cells(side, cells).unwrap()),
        1..5,
    )
}

proptest! {
    #[test]
    fn prop_weights_symmetric_zero_diagonal(set in arb_patterns(5), pinv in any::<bool>()) {
        let codec = PatternCodec::new(5);
        let method = if pinv { TrainingMethod::PseudoinverseStyle } else { TrainingMethod::Hebbian };
        let w = train(&codec, &set, method).unwrap();

        prop_assert!(w.has_zero_diagonal());
        for i in 0..25 {
            for j in 0..25 {
                prop_assert_eq!(w.get(i, j), w.get(j, i));
            }
        }
    }
}
