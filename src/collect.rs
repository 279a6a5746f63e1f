//! Collecting pair sequences into vectors.
//!
//! Single-value sequences need nothing beyond [`Iterator::collect`]; the
//! helpers here cover the two shapes a pair sequence can be flattened into.

use std::any::Any;

/// Collects a pair sequence into a flat vector, key first then value.
///
/// The result can be fed back into [`var2_any`](crate::construct::var2_any).
/// An absent sequence yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::collect::collect2;
/// use lambars_iter::construct::var2_any;
///
/// let flat = collect2(Some(vec![("a", 1), ("b", 2)]));
/// assert_eq!(flat.len(), 4);
/// assert_eq!(flat[1].downcast_ref::<i32>(), Some(&1));
///
/// let pairs: Vec<(&str, i32)> = var2_any(flat).unwrap().collect();
/// assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
/// ```
pub fn collect2<I, K, V>(sequence: Option<I>) -> Vec<Box<dyn Any + Send>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Any + Send,
    V: Any + Send,
{
    let Some(sequence) = sequence else {
        return Vec::new();
    };
    let sequence = sequence.into_iter();
    let mut collected: Vec<Box<dyn Any + Send>> =
        Vec::with_capacity(sequence.size_hint().0.saturating_mul(2));
    for (key, value) in sequence {
        collected.push(Box::new(key));
        collected.push(Box::new(value));
    }
    collected
}

/// Collects a pair sequence into a vector of tuples.
///
/// An absent sequence yields an empty vector.
pub fn collect2_tuple<I, K, V>(sequence: Option<I>) -> Vec<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
{
    sequence.map_or_else(Vec::new, |sequence| sequence.into_iter().collect())
}
