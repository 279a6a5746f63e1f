//! Element-wise equality of sequences.
//!
//! Two sequences are equal when they have the same length and every pair of
//! elements at the same position is equal. Both sequences are pulled in lock
//! step and comparison stops at the first difference.
//!
//! # Examples
//!
//! ```rust
//! use lambars_iter::equal::{sequence_equal, sequence_equal_by};
//!
//! assert_eq!(sequence_equal(Some(vec![1, 2, 3]), Some(1..=3)), Ok(true));
//!
//! let case_insensitive = |left: &str, right: &str| left.eq_ignore_ascii_case(right);
//! assert_eq!(
//!     sequence_equal_by(Some(vec!["A", "b"]), Some(vec!["a", "B"]), Some(case_insensitive)),
//!     Ok(true)
//! );
//! ```

use crate::IterError;

/// Compares two sequences with [`PartialEq`].
///
/// # Errors
///
/// Returns [`IterError::NilSequence`] if either sequence is `None`.
pub fn sequence_equal<A, B>(first: Option<A>, second: Option<B>) -> Result<bool, IterError>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    sequence_equal_by(
        first,
        second,
        Some(|left: A::Item, right: B::Item| left == right),
    )
}

/// Compares two sequences with a caller-supplied equality function.
///
/// # Errors
///
/// - [`IterError::NilSequence`] if either sequence is `None`.
/// - [`IterError::NilEqual`] if `equal` is `None`.
pub fn sequence_equal_by<A, B, F>(
    first: Option<A>,
    second: Option<B>,
    equal: Option<F>,
) -> Result<bool, IterError>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> bool,
{
    let (Some(first), Some(second)) = (first, second) else {
        return Err(IterError::NilSequence);
    };
    let mut equal = equal.ok_or(IterError::NilEqual)?;

    let mut first = first.into_iter();
    let mut second = second.into_iter();
    loop {
        match (first.next(), second.next()) {
            (None, None) => return Ok(true),
            (Some(left), Some(right)) => {
                if !equal(left, right) {
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
    }
}

/// Compares two pair sequences with [`PartialEq`] on keys and values.
///
/// # Errors
///
/// Returns [`IterError::NilSequence`] if either sequence is `None`.
pub fn sequence_equal2<A, B, K1, V1, K2, V2>(
    first: Option<A>,
    second: Option<B>,
) -> Result<bool, IterError>
where
    A: IntoIterator<Item = (K1, V1)>,
    B: IntoIterator<Item = (K2, V2)>,
    K1: PartialEq<K2>,
    V1: PartialEq<V2>,
{
    sequence_equal2_by(
        first,
        second,
        Some(|key1: K1, value1: V1, key2: K2, value2: V2| key1 == key2 && value1 == value2),
    )
}

/// Compares two pair sequences with a function over both pairs.
///
/// `equal` receives `(key1, value1, key2, value2)`.
///
/// # Errors
///
/// - [`IterError::NilSequence`] if either sequence is `None`.
/// - [`IterError::NilEqual`] if `equal` is `None`.
pub fn sequence_equal2_by<A, B, K1, V1, K2, V2, F>(
    first: Option<A>,
    second: Option<B>,
    equal: Option<F>,
) -> Result<bool, IterError>
where
    A: IntoIterator<Item = (K1, V1)>,
    B: IntoIterator<Item = (K2, V2)>,
    F: FnMut(K1, V1, K2, V2) -> bool,
{
    sequence_equal_by(
        first,
        second,
        equal.map(|mut equal| {
            move |(key1, value1): (K1, V1), (key2, value2): (K2, V2)| {
                equal(key1, value1, key2, value2)
            }
        }),
    )
}

/// Compares two pair sequences with separate key and value equality functions.
///
/// # Errors
///
/// - [`IterError::NilSequence`] if either sequence is `None`.
/// - [`IterError::NilEqual`] if either function is `None`.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::equal::sequence_equal2_by_parts;
///
/// let first = vec![(1, "One"), (2, "Two")];
/// let second = vec![(1, "one"), (2, "TWO")];
/// let result = sequence_equal2_by_parts(
///     Some(first),
///     Some(second),
///     Some(|left: i32, right: i32| left == right),
///     Some(|left: &str, right: &str| left.eq_ignore_ascii_case(right)),
/// );
/// assert_eq!(result, Ok(true));
/// ```
pub fn sequence_equal2_by_parts<A, B, K1, V1, K2, V2, FK, FV>(
    first: Option<A>,
    second: Option<B>,
    equal_key: Option<FK>,
    equal_value: Option<FV>,
) -> Result<bool, IterError>
where
    A: IntoIterator<Item = (K1, V1)>,
    B: IntoIterator<Item = (K2, V2)>,
    FK: FnMut(K1, K2) -> bool,
    FV: FnMut(V1, V2) -> bool,
{
    if first.is_none() || second.is_none() {
        return Err(IterError::NilSequence);
    }
    let (Some(mut equal_key), Some(mut equal_value)) = (equal_key, equal_value) else {
        return Err(IterError::NilEqual);
    };
    sequence_equal2_by(
        first,
        second,
        Some(move |key1: K1, value1: V1, key2: K2, value2: V2| {
            equal_key(key1, key2) && equal_value(value1, value2)
        }),
    )
}
