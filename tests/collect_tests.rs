//! Integration tests for collecting pair sequences.

use std::collections::BTreeMap;

use lambars_iter::collect::{collect2, collect2_tuple};
use lambars_iter::construct::var2_any;
use lambars_iter::var2;
use rstest::rstest;

#[rstest]
fn test_collect2_alternates_keys_and_values() {
    let collected = collect2(Some(var2!["a" => 1_i32, "b" => 2_i32]));
    assert_eq!(collected.len(), 4);
    assert_eq!(collected[0].downcast_ref::<&str>(), Some(&"a"));
    assert_eq!(collected[1].downcast_ref::<i32>(), Some(&1));
    assert_eq!(collected[2].downcast_ref::<&str>(), Some(&"b"));
    assert_eq!(collected[3].downcast_ref::<i32>(), Some(&2));
}

#[rstest]
fn test_collect2_nil_and_empty_sequences() {
    assert!(collect2(None::<Vec<(i32, i32)>>).is_empty());
    assert!(collect2(Some(Vec::<(i32, i32)>::new())).is_empty());
}

#[rstest]
fn test_collect2_feeds_var2_any() {
    let map = BTreeMap::from([(1_u8, 'x'), (2_u8, 'y')]);
    let collected = collect2(Some(map.clone()));
    let rebuilt: BTreeMap<u8, char> = var2_any(collected).unwrap().collect();
    assert_eq!(rebuilt, map);
}

#[rstest]
fn test_collect2_tuple_preserves_order() {
    let pairs = collect2_tuple(Some(var2![3 => "c", 1 => "a", 2 => "b"]));
    assert_eq!(pairs, vec![(3, "c"), (1, "a"), (2, "b")]);
}

#[rstest]
fn test_collect2_tuple_nil_sequence() {
    assert!(collect2_tuple(None::<Vec<(i32, i32)>>).is_empty());
}
