//! Error type shared by every helper in the crate.
//!
//! All operations report failures through [`IterError`]. Precondition
//! failures (an absent sequence, action, selector or equality function) are
//! detected before any element is pulled, so they are never mixed with a
//! partial result. Traversals additionally report cancellation and the error
//! returned by the caller's action.
//!
//! # Examples
//!
//! ```rust
//! use lambars_iter::IterError;
//!
//! let error: IterError<&str> = IterError::Action("disk full");
//! assert_eq!(format!("{error}"), "action failed: disk full");
//! assert_eq!(error.into_action_error(), Some("disk full"));
//! ```

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use crate::cancel::CancelReason;

/// Errors produced by the iteration helpers.
///
/// The type parameter `E` is the error type of a caller-supplied action. Helpers
/// that never run an action use the default, [`Infallible`].
///
/// Action errors are carried by value, so the caller's own error keeps its
/// identity and can be matched directly:
///
/// ```rust
/// use lambars_iter::IterError;
///
/// #[derive(Debug, PartialEq)]
/// enum Fetch {
///     NotFound,
/// }
///
/// let error = IterError::Action(Fetch::NotFound);
/// assert!(matches!(error, IterError::Action(Fetch::NotFound)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterError<E = Infallible> {
    /// The sequence was absent.
    NilSequence,
    /// The per-element action was absent.
    NilAction,
    /// The projection function was absent.
    NilSelector,
    /// The equality function was absent.
    NilEqual,
    /// A dynamically typed key/value list had an odd number of entries.
    OddValues {
        /// Number of entries supplied.
        count: usize,
    },
    /// An entry of a dynamically typed key/value list had an unexpected type.
    WrongType {
        /// Position of the offending entry.
        index: usize,
        /// Name of the type expected at that position.
        expected: &'static str,
    },
    /// The traversal observed a cancelled token.
    Cancelled(CancelReason),
    /// The caller's action returned an error.
    Action(E),
}

impl<E> IterError<E> {
    /// Returns `true` for the errors reported before any work is done.
    #[inline]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NilSequence
                | Self::NilAction
                | Self::NilSelector
                | Self::NilEqual
                | Self::OddValues { .. }
                | Self::WrongType { .. }
        )
    }

    /// Returns `true` if the traversal stopped because its token was cancelled.
    #[inline]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    /// Returns the cancellation reason, if any.
    #[inline]
    pub const fn cancel_reason(&self) -> Option<CancelReason> {
        match self {
            Self::Cancelled(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Returns a reference to the action error, if any.
    #[inline]
    pub const fn action_error(&self) -> Option<&E> {
        match self {
            Self::Action(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes the error and returns the action error, if any.
    #[inline]
    pub fn into_action_error(self) -> Option<E> {
        match self {
            Self::Action(error) => Some(error),
            _ => None,
        }
    }

    /// Transforms the action error, leaving every other variant untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iter::IterError;
    ///
    /// let error: IterError<i32> = IterError::Action(404);
    /// assert_eq!(error.map_action(|code| code.to_string()), IterError::Action("404".to_string()));
    /// ```
    pub fn map_action<E2, F>(self, function: F) -> IterError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::NilSequence => IterError::NilSequence,
            Self::NilAction => IterError::NilAction,
            Self::NilSelector => IterError::NilSelector,
            Self::NilEqual => IterError::NilEqual,
            Self::OddValues { count } => IterError::OddValues { count },
            Self::WrongType { index, expected } => IterError::WrongType { index, expected },
            Self::Cancelled(reason) => IterError::Cancelled(reason),
            Self::Action(error) => IterError::Action(function(error)),
        }
    }
}

impl<E: fmt::Display> fmt::Display for IterError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NilSequence => write!(formatter, "nil sequence"),
            Self::NilAction => write!(formatter, "nil action"),
            Self::NilSelector => write!(formatter, "nil selector"),
            Self::NilEqual => write!(formatter, "nil equal"),
            Self::OddValues { count } => write!(formatter, "odd number of values: {count}"),
            Self::WrongType { index, expected } => {
                write!(formatter, "wrong type at index {index}: want {expected}")
            }
            Self::Cancelled(reason) => write!(formatter, "{reason}"),
            Self::Action(error) => write!(formatter, "action failed: {error}"),
        }
    }
}

impl<E> Error for IterError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Action(error) => Some(error),
            _ => None,
        }
    }
}

impl<E> From<CancelReason> for IterError<E> {
    fn from(reason: CancelReason) -> Self {
        Self::Cancelled(reason)
    }
}
