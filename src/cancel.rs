//! Cooperative cancellation for traversals.
//!
//! A traversal polls a [`Cancellation`] before running each action. The
//! trait is deliberately small: anything that can answer "has this been
//! cancelled, and why?" can stop a traversal.
//!
//! - [`CancelToken`]: a shareable token with optional deadline and parent,
//!   built on `tokio_util`'s [`CancellationToken`]
//! - [`Never`]: a token that is never cancelled, used when no cancellation is wanted
//!
//! Cancellation is monotonic. Once a token reports a [`CancelReason`] it keeps
//! reporting the same reason.
//!
//! # Examples
//!
//! ```rust
//! use lambars_iter::cancel::{CancelReason, CancelToken, Cancellation};
//!
//! let parent = CancelToken::new();
//! let child = parent.child();
//! assert!(!child.is_cancelled());
//!
//! parent.cancel();
//! assert_eq!(child.cancelled(), Some(CancelReason::Cancelled));
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

const STATE_ACTIVE: u8 = 0;
const STATE_CANCELLED: u8 = 1;
const STATE_DEADLINE_EXCEEDED: u8 = 2;

/// Why a token stopped being active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The token was cancelled explicitly.
    Cancelled,
    /// The token's deadline passed.
    DeadlineExceeded,
}

impl CancelReason {
    const fn from_state(state: u8) -> Option<Self> {
        match state {
            STATE_CANCELLED => Some(Self::Cancelled),
            STATE_DEADLINE_EXCEEDED => Some(Self::DeadlineExceeded),
            _ => None,
        }
    }

    const fn to_state(self) -> u8 {
        match self {
            Self::Cancelled => STATE_CANCELLED,
            Self::DeadlineExceeded => STATE_DEADLINE_EXCEEDED,
        }
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(formatter, "traversal cancelled"),
            Self::DeadlineExceeded => write!(formatter, "deadline exceeded"),
        }
    }
}

impl std::error::Error for CancelReason {}

/// A source of cooperative cancellation.
///
/// Implementations must be monotonic: after `cancelled` returns `Some`, every
/// later call returns `Some` as well.
pub trait Cancellation {
    /// Returns the reason this token is cancelled, or `None` while it is active.
    fn cancelled(&self) -> Option<CancelReason>;

    /// Returns `true` once the token is cancelled.
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancelled().is_some()
    }
}

/// A token that is never cancelled.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::cancel::{Cancellation, Never};
///
/// assert!(!Never.is_cancelled());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl Cancellation for Never {
    #[inline]
    fn cancelled(&self) -> Option<CancelReason> {
        None
    }
}

impl<T: Cancellation + ?Sized> Cancellation for &T {
    #[inline]
    fn cancelled(&self) -> Option<CancelReason> {
        (**self).cancelled()
    }
}

impl<T: Cancellation + ?Sized> Cancellation for Arc<T> {
    #[inline]
    fn cancelled(&self) -> Option<CancelReason> {
        (**self).cancelled()
    }
}

/// An absent token behaves like [`Never`].
impl<T: Cancellation> Cancellation for Option<T> {
    #[inline]
    fn cancelled(&self) -> Option<CancelReason> {
        self.as_ref().and_then(Cancellation::cancelled)
    }
}

/// A raised flag reads as [`CancelReason::Cancelled`].
impl Cancellation for AtomicBool {
    #[inline]
    fn cancelled(&self) -> Option<CancelReason> {
        self.load(Ordering::Acquire)
            .then_some(CancelReason::Cancelled)
    }
}

/// An upstream [`CancellationToken`] reads as [`CancelReason::Cancelled`].
impl Cancellation for CancellationToken {
    #[inline]
    fn cancelled(&self) -> Option<CancelReason> {
        self.is_cancelled().then_some(CancelReason::Cancelled)
    }
}

struct Settings {
    reason: AtomicU8,
    deadline: Option<Instant>,
    parent: Option<CancelToken>,
}

/// A cloneable cancellation token with an optional deadline.
///
/// Built on [`CancellationToken`]: clones share state, so cancelling one clone
/// cancels all of them. A token created with [`child`](Self::child) is
/// cancelled whenever its parent is, but cancelling the child leaves the
/// parent active. On top of the underlying token it keeps the first
/// [`CancelReason`] observed and a deadline that is checked on every poll.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use lambars_iter::cancel::{CancelReason, CancelToken, Cancellation};
///
/// let token = CancelToken::with_timeout(Duration::ZERO);
/// assert_eq!(token.cancelled(), Some(CancelReason::DeadlineExceeded));
/// ```
#[derive(Clone)]
pub struct CancelToken {
    token: CancellationToken,
    settings: Arc<Settings>,
}

impl CancelToken {
    /// Creates an active token with no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::build(CancellationToken::new(), None, None)
    }

    /// Creates a token that cancels itself once `deadline` is reached.
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::build(CancellationToken::new(), Some(deadline), None)
    }

    /// Creates a token that cancels itself after `timeout` has elapsed.
    ///
    /// A timeout too large to represent as an [`Instant`] means no deadline.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(
            CancellationToken::new(),
            Instant::now().checked_add(timeout),
            None,
        )
    }

    /// Creates a token that follows this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Self::build(self.token.child_token(), None, Some(self.clone()))
    }

    /// Creates a token that follows this one and also has its own deadline.
    #[must_use]
    pub fn child_with_deadline(&self, deadline: Instant) -> Self {
        Self::build(self.token.child_token(), Some(deadline), Some(self.clone()))
    }

    fn build(token: CancellationToken, deadline: Option<Instant>, parent: Option<Self>) -> Self {
        Self {
            token,
            settings: Arc::new(Settings {
                reason: AtomicU8::new(STATE_ACTIVE),
                deadline,
                parent,
            }),
        }
    }

    /// Cancels the token and every child created from it.
    ///
    /// Has no effect if the token is already cancelled.
    pub fn cancel(&self) {
        self.settle(CancelReason::Cancelled);
    }

    /// Returns the deadline configured on this token, not inherited ones.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.settings.deadline
    }

    /// Returns the underlying token, for waiting on cancellation in async code.
    ///
    /// An elapsed deadline is only propagated to it once this token has been
    /// polled through [`Cancellation::cancelled`].
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Records `reason` unless one is already recorded, then cancels the
    /// underlying token. Returns the reason that sticks.
    fn settle(&self, reason: CancelReason) -> CancelReason {
        let settled = match self.settings.reason.compare_exchange(
            STATE_ACTIVE,
            reason.to_state(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => reason,
            Err(current) => CancelReason::from_state(current).unwrap_or(reason),
        };
        self.token.cancel();
        settled
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellation for CancelToken {
    fn cancelled(&self) -> Option<CancelReason> {
        if let Some(reason) = CancelReason::from_state(self.settings.reason.load(Ordering::Acquire))
        {
            return Some(reason);
        }
        // A parent's reason is only known once the parent itself is polled.
        if let Some(reason) = self.settings.parent.cancelled() {
            return Some(self.settle(reason));
        }
        if self.token.is_cancelled() {
            return Some(self.settle(CancelReason::Cancelled));
        }
        match self.settings.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                Some(self.settle(CancelReason::DeadlineExceeded))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CancelToken")
            .field("cancelled", &self.cancelled())
            .field("deadline", &self.settings.deadline)
            .finish_non_exhaustive()
    }
}
