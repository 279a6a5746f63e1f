//! Conversions between single-value and pair sequences.
//!
//! Every function validates its inputs eagerly and returns a lazy iterator:
//! the selector runs only as the result is pulled, and dropping the result
//! early is fine.
//!
//! # Examples
//!
//! ```rust
//! use lambars_iter::project::{keys, seq_to_seq2};
//!
//! let words = vec!["apple".to_string(), "kiwi".to_string()];
//! let by_length = seq_to_seq2(Some(words), Some(|word: String| (word.len(), word))).unwrap();
//! let lengths: Vec<usize> = keys(Some(by_length)).unwrap().collect();
//! assert_eq!(lengths, vec![5, 4]);
//! ```

use crate::IterError;

/// Converts a sequence into a pair sequence using `selector`.
///
/// # Errors
///
/// - [`IterError::NilSequence`] if `sequence` is `None`.
/// - [`IterError::NilSelector`] if `selector` is `None`.
pub fn seq_to_seq2<I, F, K, V>(
    sequence: Option<I>,
    selector: Option<F>,
) -> Result<impl Iterator<Item = (K, V)>, IterError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> (K, V),
{
    let sequence = sequence.ok_or(IterError::NilSequence)?;
    let selector = selector.ok_or(IterError::NilSelector)?;
    Ok(sequence.into_iter().map(selector))
}

/// Converts a pair sequence into a sequence using `selector`.
///
/// # Errors
///
/// - [`IterError::NilSequence`] if `sequence` is `None`.
/// - [`IterError::NilSelector`] if `selector` is `None`.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::project::seq2_to_seq;
///
/// let pairs = vec![("x", 1), ("y", 2)];
/// let rendered: Vec<String> = seq2_to_seq(Some(pairs), Some(|key: &str, value: i32| format!("{key}={value}")))
///     .unwrap()
///     .collect();
/// assert_eq!(rendered, vec!["x=1", "y=2"]);
/// ```
pub fn seq2_to_seq<I, F, K, V, R>(
    sequence: Option<I>,
    selector: Option<F>,
) -> Result<impl Iterator<Item = R>, IterError>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> R,
{
    let sequence = sequence.ok_or(IterError::NilSequence)?;
    let mut selector = selector.ok_or(IterError::NilSelector)?;
    Ok(sequence
        .into_iter()
        .map(move |(key, value)| selector(key, value)))
}

/// Returns the keys of a pair sequence.
///
/// # Errors
///
/// Returns [`IterError::NilSequence`] if `sequence` is `None`.
pub fn keys<I, K, V>(sequence: Option<I>) -> Result<impl Iterator<Item = K>, IterError>
where
    I: IntoIterator<Item = (K, V)>,
{
    seq2_to_seq(sequence, Some(|key: K, _: V| key))
}

/// Returns the values of a pair sequence.
///
/// # Errors
///
/// Returns [`IterError::NilSequence`] if `sequence` is `None`.
pub fn values<I, K, V>(sequence: Option<I>) -> Result<impl Iterator<Item = V>, IterError>
where
    I: IntoIterator<Item = (K, V)>,
{
    seq2_to_seq(sequence, Some(|_: K, value: V| value))
}
