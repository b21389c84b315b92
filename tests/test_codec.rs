//! Tests for PatternCodec.
//!
//! Tests cover:
//! - Row-major flattening and value mapping
//! - Shape validation on both directions
//! - Round-trip law (property-based)

use hopfield::{BipolarVector, HopfieldError, Image, PatternCodec};
use proptest::prelude::*;

#[test]
fn test_encode_maps_values_row_major() {
    let codec = PatternCodec::new(3);
    let img = Image::from_rows(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
    let v = codec.encode(&img).unwrap();

    assert_eq!(v.len(), 9);
    for row in 0..3 {
        for col in 0..3 {
            let expected = if row == col { 1 } else { -1 };
            assert_eq!(v.get(row * 3 + col), expected, "row {} col {}", row, col);
        }
    }
}

#[test]
fn test_decode_reshapes() {
    let codec = PatternCodec::new(2);
    let img = codec.decode(&BipolarVector::new(vec![-1, 1, 1, -1]).unwrap()).unwrap();
    assert_eq!(img.get(0, 0), 0);
    assert_eq!(img.get(0, 1), 1);
    assert_eq!(img.get(1, 0), 1);
    assert_eq!(img.get(1, 1), 0);
}

#[test]
fn test_encode_does_not_alias_source() {
    let codec = PatternCodec::new(2);
    let mut img = Image::blank(2);
    let v = codec.encode(&img).unwrap();
    img.flip(0);
    assert_eq!(v.get(0), -1);
}

#[test]
fn test_shape_errors() {
    let codec = PatternCodec::default();

    assert!(matches!(
        codec.encode(&Image::blank(8)),
        Err(HopfieldError::Shape { expected: 10, actual: 8 })
    ));
    assert!(matches!(
        codec.decode(&BipolarVector::new(vec![1; 101]).unwrap()),
        Err(HopfieldError::Shape { expected: 100, actual: 101 })
    ));
}

#[test]
fn test_non_square_image_rejected() {
    let err = Image::from_rows(vec![vec![0, 1, 0], vec![1, 0, 1]]).unwrap_err();
    assert!(matches!(err, HopfieldError::Shape { .. }));
}

// =============================================================================
// Property-Based Tests
// =============================================================================

fn arb_image() -> impl Strategy<Value = Image> {
    (1..12usize).prop_flat_map(|side| {
        prop::collection::vec(0..=1u8, side * side)
            .prop_map(move |cells| Image::from_cells(side, cells).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_round_trip(img in arb_image()) {
        let codec = PatternCodec::new(img.side());
        let decoded = codec.decode(&codec.encode(&img).unwrap()).unwrap();
        prop_assert_eq!(decoded, img);
    }

    #[test]
    fn prop_encode_counts_match(img in arb_image()) {
        let codec = PatternCodec::new(img.side());
        let v = codec.encode(&img).unwrap();
        let positives = v.as_slice().iter().filter(|&&x| x == 1).count();
        prop_assert_eq!(positives, img.num_set());
    }
}
