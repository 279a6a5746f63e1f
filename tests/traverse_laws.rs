#![cfg(feature = "traverse")]
//! Property-based tests for traversal.
//!
//! - Sequential traversal visits every element in order when nothing fails
//! - The first failing element is the last one visited
//! - Concurrent traversal visits the same multiset of elements

use lambars_iter::IterError;
use lambars_iter::cancel::Never;
use lambars_iter::traverse::for_each;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_for_each_visits_every_element_in_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut seen = Vec::with_capacity(values.len());
        let result = for_each(&Never, Some(values.clone()), Some(|value: i32| {
            seen.push(value);
            Ok::<(), ()>(())
        }));
        prop_assert_eq!(result, Ok(()));
        prop_assert_eq!(seen, values);
    }

    #[test]
    fn prop_for_each_stops_at_first_negative(values in prop::collection::vec(-8..8_i32, 0..32)) {
        let mut seen = Vec::new();
        let result = for_each(&Never, Some(values.clone()), Some(|value: i32| {
            seen.push(value);
            if value < 0 { Err(value) } else { Ok(()) }
        }));

        match values.iter().position(|value| *value < 0) {
            Some(index) => {
                prop_assert_eq!(result, Err(IterError::Action(values[index])));
                prop_assert_eq!(&seen[..], &values[..=index]);
            }
            None => {
                prop_assert_eq!(result, Ok(()));
                prop_assert_eq!(seen, values);
            }
        }
    }
}

#[cfg(feature = "concurrent")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_for_each_concurrent_visits_same_elements(values in prop::collection::vec(any::<u16>(), 0..128)) {
        use lambars_iter::traverse::for_each_concurrent;

        let seen = std::sync::Mutex::new(Vec::with_capacity(values.len()));
        let result = for_each_concurrent(&Never, Some(values.clone()), Some(|value: u16| {
            seen.lock().unwrap().push(value);
            Ok::<(), ()>(())
        }));
        prop_assert_eq!(result, Ok(()));

        let mut seen = seen.into_inner().unwrap();
        let mut expected = values;
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }
}
