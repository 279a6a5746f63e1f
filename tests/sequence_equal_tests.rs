//! Integration tests for sequence equality.

use lambars_iter::IterError;
use lambars_iter::equal::{
    sequence_equal, sequence_equal_by, sequence_equal2, sequence_equal2_by,
    sequence_equal2_by_parts,
};
use lambars_iter::{var, var2};
use rstest::rstest;

type Pair = (i32, &'static str);

// =============================================================================
// Single-Value Sequences
// =============================================================================

#[rstest]
#[case(vec![], vec![], true)]
#[case(vec![1, 2, 3], vec![1, 2, 3], true)]
#[case(vec![1, 2, 3], vec![1, 2, 4], false)]
#[case(vec![1, 2], vec![1, 2, 3], false)]
#[case(vec![1, 2, 3], vec![1, 2], false)]
#[case(vec![], vec![1], false)]
fn test_sequence_equal(#[case] first: Vec<i32>, #[case] second: Vec<i32>, #[case] expected: bool) {
    assert_eq!(sequence_equal(Some(first), Some(second)), Ok(expected));
}

#[rstest]
fn test_sequence_equal_across_item_types() {
    let owned = vec![String::from("a"), String::from("b")];
    assert_eq!(sequence_equal(Some(owned), Some(var!["a", "b"])), Ok(true));
}

#[rstest]
fn test_sequence_equal_nil_sequence() {
    assert_eq!(
        sequence_equal(None::<Vec<i32>>, Some(var![1])),
        Err(IterError::NilSequence)
    );
    assert_eq!(
        sequence_equal(Some(var![1]), None::<Vec<i32>>),
        Err(IterError::NilSequence)
    );
}

#[rstest]
fn test_sequence_equal_by_custom_function() {
    let result = sequence_equal_by(
        Some(var!["Hello", "World"]),
        Some(var!["hello", "WORLD"]),
        Some(|left: &str, right: &str| left.eq_ignore_ascii_case(right)),
    );
    assert_eq!(result, Ok(true));
}

#[rstest]
fn test_sequence_equal_by_nil_equal() {
    let result = sequence_equal_by(Some(var![1]), Some(var![1]), None::<fn(i32, i32) -> bool>);
    assert_eq!(result, Err(IterError::NilEqual));
}

#[rstest]
fn test_sequence_equal_by_reports_nil_sequence_before_nil_equal() {
    let result = sequence_equal_by(None::<Vec<i32>>, Some(var![1]), None::<fn(i32, i32) -> bool>);
    assert_eq!(result, Err(IterError::NilSequence));
}

#[rstest]
fn test_sequence_equal_by_stops_at_first_mismatch() {
    let mut compared = 0;
    let result = sequence_equal_by(
        Some(0..),
        Some(var![0, 1, 7, 3]),
        Some(|left: i32, right: i32| {
            compared += 1;
            left == right
        }),
    );
    assert_eq!(result, Ok(false));
    assert_eq!(compared, 3);
}

#[rstest]
fn test_sequence_equal_by_length_mismatch_after_equal_prefix() {
    let result = sequence_equal_by(
        Some(var![1, 2]),
        Some(var![1, 2, 3]),
        Some(|_: i32, _: i32| true),
    );
    assert_eq!(result, Ok(false));
}

// =============================================================================
// Pair Sequences
// =============================================================================

#[rstest]
fn test_sequence_equal2() {
    let first: Vec<Pair> = vec![(1, "one"), (2, "two")];
    assert_eq!(
        sequence_equal2(Some(first.clone()), Some(var2![1 => "one", 2 => "two"])),
        Ok(true)
    );
    assert_eq!(
        sequence_equal2(Some(first.clone()), Some(var2![1 => "one", 2 => "deux"])),
        Ok(false)
    );
    assert_eq!(
        sequence_equal2(Some(first), Some(var2![1 => "one"])),
        Ok(false)
    );
}

#[rstest]
fn test_sequence_equal2_nil_sequence() {
    assert_eq!(
        sequence_equal2(None::<Vec<Pair>>, Some(var2![1 => "one"])),
        Err(IterError::NilSequence)
    );
}

#[rstest]
fn test_sequence_equal2_by_sees_both_pairs() {
    let result = sequence_equal2_by(
        Some(var2![1 => 10, 2 => 20]),
        Some(var2![10 => 1, 20 => 2]),
        Some(|key1: i32, value1: i32, key2: i32, value2: i32| key1 == value2 && value1 == key2),
    );
    assert_eq!(result, Ok(true));
}

#[rstest]
fn test_sequence_equal2_by_nil_equal() {
    let result = sequence_equal2_by(
        Some(var2![1 => 1]),
        Some(var2![1 => 1]),
        None::<fn(i32, i32, i32, i32) -> bool>,
    );
    assert_eq!(result, Err(IterError::NilEqual));
}

#[rstest]
fn test_sequence_equal2_by_parts() {
    let result = sequence_equal2_by_parts(
        Some(var2![1 => "One", 2 => "Two"]),
        Some(var2![1 => "one", 2 => "TWO"]),
        Some(|left: i32, right: i32| left == right),
        Some(|left: &str, right: &str| left.eq_ignore_ascii_case(right)),
    );
    assert_eq!(result, Ok(true));

    let result = sequence_equal2_by_parts(
        Some(var2![1 => "One"]),
        Some(var2![2 => "One"]),
        Some(|left: i32, right: i32| left == right),
        Some(|left: &str, right: &str| left == right),
    );
    assert_eq!(result, Ok(false));
}

#[rstest]
fn test_sequence_equal2_by_parts_nil_functions() {
    let result = sequence_equal2_by_parts(
        Some(var2![1 => 1]),
        Some(var2![1 => 1]),
        None::<fn(i32, i32) -> bool>,
        Some(|left: i32, right: i32| left == right),
    );
    assert_eq!(result, Err(IterError::NilEqual));

    let result = sequence_equal2_by_parts(
        Some(var2![1 => 1]),
        Some(var2![1 => 1]),
        Some(|left: i32, right: i32| left == right),
        None::<fn(i32, i32) -> bool>,
    );
    assert_eq!(result, Err(IterError::NilEqual));

    let result = sequence_equal2_by_parts(
        None::<Vec<(i32, i32)>>,
        Some(var2![1 => 1]),
        None::<fn(i32, i32) -> bool>,
        None::<fn(i32, i32) -> bool>,
    );
    assert_eq!(result, Err(IterError::NilSequence));
}
