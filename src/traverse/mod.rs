//! Side-effecting traversal of sequences with cooperative cancellation.
//!
//! Every traversal takes a [`Cancellation`], an optional sequence and an
//! optional action, and reports the outcome as `Result<(), IterError<E>>`:
//!
//! - [`for_each`] / [`for_each_keyed`]: sequential, in sequence order
//! - [`for_each_concurrent`] / [`for_each_concurrent_keyed`]: one rayon job per element
//!   (feature `concurrent`)
//! - [`for_each_async`] / [`for_each_concurrent_async`] and their keyed forms: over
//!   `futures::Stream`s, the concurrent form on tokio tasks (feature `async`)
//!
//! All variants share the same validation and error taxonomy: an absent
//! sequence is [`IterError::NilSequence`], an absent action is
//! [`IterError::NilAction`], and both are reported before anything is pulled.
//! Cancellation surfaces as [`IterError::Cancelled`] and a failing action as
//! [`IterError::Action`], through the same single error value.
//!
//! # Examples
//!
//! ```rust
//! use lambars_iter::cancel::CancelToken;
//! use lambars_iter::traverse::for_each;
//! use lambars_iter::IterError;
//!
//! let token = CancelToken::new();
//! let mut seen = Vec::new();
//! let result = for_each(&token, Some(1..=3), Some(|value: i32| {
//!     seen.push(value);
//!     if value == 2 { Err("two") } else { Ok(()) }
//! }));
//!
//! assert_eq!(result, Err(IterError::Action("two")));
//! assert_eq!(seen, vec![1, 2]);
//! ```
//!
//! [`Cancellation`]: crate::cancel::Cancellation

#[cfg(feature = "concurrent")]
mod concurrent;
#[cfg(feature = "async")]
mod stream;

#[cfg(feature = "concurrent")]
pub use concurrent::{
    for_each_concurrent, for_each_concurrent_in, for_each_concurrent_keyed,
    for_each_concurrent_keyed_in,
};
#[cfg(feature = "async")]
pub use stream::{
    for_each_async, for_each_concurrent_async, for_each_concurrent_keyed_async,
    for_each_keyed_async,
};

use crate::IterError;
use crate::cancel::Cancellation;

/// Validates the inputs shared by every traversal.
fn unpack<S, F, E>(sequence: Option<S>, action: Option<F>) -> Result<(S, F), IterError<E>> {
    let sequence = sequence.ok_or(IterError::NilSequence)?;
    let action = action.ok_or(IterError::NilAction)?;
    Ok((sequence, action))
}

/// Runs `action` on each element of `sequence`, in order.
///
/// Before each action the token is polled; once it is cancelled the traversal
/// stops without pulling further elements. The first failing action stops
/// the traversal as well.
///
/// # Errors
///
/// - [`IterError::NilSequence`] / [`IterError::NilAction`] for absent inputs;
///   no action is invoked.
/// - [`IterError::Cancelled`] when the token is cancelled before an action runs.
/// - [`IterError::Action`] with the first error returned by `action`.
pub fn for_each<C, I, F, E>(
    cancellation: &C,
    sequence: Option<I>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + ?Sized,
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<(), E>,
{
    let (sequence, mut action) = unpack(sequence, action)?;
    for (visited, element) in sequence.into_iter().enumerate() {
        if let Some(reason) = cancellation.cancelled() {
            tracing::debug!(visited, %reason, "sequential traversal cancelled");
            return Err(IterError::Cancelled(reason));
        }
        action(element).map_err(IterError::Action)?;
    }
    Ok(())
}

/// Runs `action` on each pair of `sequence`, in order.
///
/// Behaves exactly like [`for_each`] with the pair split into two arguments.
///
/// # Errors
///
/// See [`for_each`].
///
/// # Examples
///
/// ```rust
/// use lambars_iter::cancel::Never;
/// use lambars_iter::traverse::for_each_keyed;
///
/// let mut total = 0;
/// let result = for_each_keyed(&Never, Some(vec![("a", 1), ("b", 2)]), Some(|_key: &str, value: i32| {
///     total += value;
///     Ok::<(), ()>(())
/// }));
/// assert!(result.is_ok());
/// assert_eq!(total, 3);
/// ```
pub fn for_each_keyed<C, I, K, V, F, E>(
    cancellation: &C,
    sequence: Option<I>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> Result<(), E>,
{
    for_each(
        cancellation,
        sequence,
        action.map(|mut action| move |(key, value): (K, V)| action(key, value)),
    )
}
