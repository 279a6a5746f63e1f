//! Building sequences from argument lists, channels and nothing at all.
//!
//! - [`var!`](crate::var): a sequence over the listed values
//! - [`var2!`](crate::var2): a pair sequence over the listed `key => value` entries
//! - [`var2_any`]: a pair sequence over a dynamically typed, alternating key/value list
//! - [`empty`] / [`empty2`]: sequences that yield nothing
//! - [`chan_all`] / [`chan_all2`]: sequences over the values received on a channel
//!
//! # Examples
//!
//! ```rust
//! use lambars_iter::{var, var2};
//!
//! let values: Vec<i32> = var![1, 2, 3].collect();
//! assert_eq!(values, vec![1, 2, 3]);
//!
//! let pairs: Vec<(&str, i32)> = var2!["one" => 1, "two" => 2].collect();
//! assert_eq!(pairs, vec![("one", 1), ("two", 2)]);
//! ```

use std::any::{Any, type_name};
use std::iter::{Empty, Enumerate, FusedIterator};

use crossbeam::channel::Receiver;

use crate::IterError;

/// Creates a sequence over the listed values.
///
/// Expands to an owning iterator over an array of the arguments, so the
/// values are yielded in the order they are written.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::var;
///
/// let sum: i32 = var![1, 2, 3, 4].sum();
/// assert_eq!(sum, 10);
///
/// let mut nothing = var![];
/// assert_eq!(nothing.next(), None::<i32>);
/// ```
#[macro_export]
macro_rules! var {
    () => {
        ::core::iter::empty()
    };
    ($($value:expr),+ $(,)?) => {
        ::core::iter::IntoIterator::into_iter([$($value),+])
    };
}

/// Creates a pair sequence over the listed `key => value` entries.
///
/// Keys and values are type checked at compile time; see [`var2_any`] for
/// lists whose types are only known at run time.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::var2;
///
/// let keys: Vec<char> = var2!['a' => 1, 'b' => 2].map(|(key, _)| key).collect();
/// assert_eq!(keys, vec!['a', 'b']);
/// ```
#[macro_export]
macro_rules! var2 {
    () => {
        ::core::iter::empty()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::core::iter::IntoIterator::into_iter([$(($key, $value)),+])
    };
}

/// Builds a pair sequence from an alternating list of keys and values.
///
/// Entries at even positions must be `K`, entries at odd positions must be
/// `V`. The whole list is validated before the sequence is returned.
///
/// # Errors
///
/// - [`IterError::OddValues`] if the list has an odd number of entries.
/// - [`IterError::WrongType`] for the first entry whose type does not match,
///   carrying its position and the expected type name.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use lambars_iter::construct::var2_any;
///
/// let values: Vec<Box<dyn Any + Send>> = vec![Box::new("a"), Box::new(1), Box::new("b"), Box::new(2)];
/// let pairs: Vec<(&str, i32)> = var2_any(values).unwrap().collect();
/// assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
/// ```
pub fn var2_any<K, V>(
    values: Vec<Box<dyn Any + Send>>,
) -> Result<std::vec::IntoIter<(K, V)>, IterError>
where
    K: Any,
    V: Any,
{
    let count = values.len();
    if count % 2 != 0 {
        return Err(IterError::OddValues { count });
    }

    let mut pairs = Vec::with_capacity(count / 2);
    let mut entries = values.into_iter();
    let mut index = 0;
    while let (Some(key), Some(value)) = (entries.next(), entries.next()) {
        let key = downcast::<K>(index, key)?;
        let value = downcast::<V>(index + 1, value)?;
        pairs.push((key, value));
        index += 2;
    }
    Ok(pairs.into_iter())
}

fn downcast<T: Any>(index: usize, entry: Box<dyn Any + Send>) -> Result<T, IterError> {
    entry
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| IterError::WrongType {
            index,
            expected: type_name::<T>(),
        })
}

/// Returns a sequence that yields no values.
#[inline]
pub const fn empty<V>() -> Empty<V> {
    std::iter::empty()
}

/// Returns a pair sequence that yields no pairs.
#[inline]
pub const fn empty2<K, V>() -> Empty<(K, V)> {
    std::iter::empty()
}

/// Iterator over the values received on a channel.
///
/// Created by [`chan_all`]. Blocks on each pull until a value arrives and ends
/// once every sender has been dropped and the channel is drained.
#[derive(Debug)]
pub struct ChanAll<E> {
    receiver: Option<Receiver<E>>,
}

impl<E> Iterator for ChanAll<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        let received = self.receiver.as_ref()?.recv().ok();
        if received.is_none() {
            self.receiver = None;
        }
        received
    }
}

impl<E> FusedIterator for ChanAll<E> {}

/// Returns a sequence over the values received on `receiver`.
///
/// An absent receiver yields the empty sequence.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::construct::chan_all;
///
/// let (sender, receiver) = crossbeam::channel::unbounded();
/// for value in 1..=3 {
///     sender.send(value).unwrap();
/// }
/// drop(sender);
///
/// let received: Vec<i32> = chan_all(Some(receiver)).collect();
/// assert_eq!(received, vec![1, 2, 3]);
/// ```
#[inline]
pub const fn chan_all<E>(receiver: Option<Receiver<E>>) -> ChanAll<E> {
    ChanAll { receiver }
}

/// Returns a pair sequence of `(index, value)` over the values received on
/// `receiver`, indexed from zero.
///
/// An absent receiver yields the empty sequence.
#[inline]
pub fn chan_all2<E>(receiver: Option<Receiver<E>>) -> Enumerate<ChanAll<E>> {
    chan_all(receiver).enumerate()
}
