//! Concurrent traversal on rayon.
//!
//! Each pulled element becomes one job spawned into a `rayon` scope. The
//! scope is the join barrier: no job outlives the call. Failures are written
//! into a single first-error slot, so exactly one error is reported however
//! many jobs fail.
//!
//! # Dispatch
//!
//! The sequence is pulled by a single producer. Before dispatching each
//! element the producer checks the slot and the token:
//!
//! - a recorded failure stops dispatching
//! - a cancelled token records [`IterError::Cancelled`] and stops dispatching
//!
//! Jobs already dispatched always run to completion. Each job polls the token
//! again immediately before its action and skips the action if cancelled.
//! Which of several simultaneous failures is reported is unspecified.
//!
//! A panicking action counts as a failure for dispatch purposes; the panic is
//! re-raised after every job has been joined.
//!
//! While the number of queued jobs reaches the pool's thread count, the
//! producer runs queued jobs itself before pulling the next element, so a
//! one-thread pool still observes failures and cancellation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rayon::{Scope, ThreadPool, Yield};

use super::unpack;
use crate::IterError;
use crate::cancel::Cancellation;

type Payload = Box<dyn Any + Send>;

/// State shared between the producer and the jobs of one traversal.
struct Progress<E> {
    first_error: Mutex<Option<E>>,
    panic: Mutex<Option<Payload>>,
    queued: AtomicUsize,
}

impl<E> Progress<E> {
    fn new() -> Self {
        Self {
            first_error: Mutex::new(None),
            panic: Mutex::new(None),
            queued: AtomicUsize::new(0),
        }
    }

    /// Stores `error` unless a failure is already recorded.
    fn record(&self, error: E) {
        let mut slot = self.first_error.lock();
        if slot.is_none() {
            *slot = Some(error);
        }
    }

    /// Keeps the first panic payload; later ones are dropped.
    fn record_panic(&self, payload: Payload) {
        let mut slot = self.panic.lock();
        if slot.is_none() {
            *slot = Some(payload);
        }
    }

    fn is_failed(&self) -> bool {
        self.first_error.lock().is_some() || self.panic.lock().is_some()
    }

    /// Returns the recorded failure, re-raising a recorded panic first.
    fn into_result(self) -> Result<(), E> {
        if let Some(payload) = self.panic.into_inner() {
            panic::resume_unwind(payload);
        }
        self.first_error.into_inner().map_or(Ok(()), Err)
    }
}

/// Runs queued jobs on the producer's own thread while at least as many jobs
/// wait as the pool has threads. Keeps a traversal moving on a one-thread pool.
fn help_while_backlogged<E>(progress: &Progress<E>) {
    while progress.queued.load(Ordering::Acquire) >= rayon::current_num_threads() {
        if !matches!(rayon::yield_local(), Some(Yield::Executed)) {
            break;
        }
    }
}

/// Pulls `sequence` and spawns one job per element into `scope`.
///
/// Returns the number of dispatched jobs.
fn fan_out<'scope, C, I, F, E>(
    scope: &Scope<'scope>,
    cancellation: &'scope C,
    sequence: I,
    action: &'scope F,
    progress: &'scope Progress<IterError<E>>,
) -> usize
where
    C: Cancellation + Sync + ?Sized,
    I: Iterator,
    I::Item: Send + 'scope,
    F: Fn(I::Item) -> Result<(), E> + Sync,
    E: Send,
{
    let mut dispatched = 0;
    for element in sequence {
        if progress.is_failed() {
            tracing::debug!(dispatched, "concurrent traversal stopped dispatching after a failure");
            break;
        }
        if let Some(reason) = cancellation.cancelled() {
            tracing::debug!(dispatched, %reason, "concurrent traversal stopped dispatching");
            progress.record(IterError::Cancelled(reason));
            break;
        }
        progress.queued.fetch_add(1, Ordering::AcqRel);
        scope.spawn(move |_| {
            progress.queued.fetch_sub(1, Ordering::AcqRel);
            if let Some(reason) = cancellation.cancelled() {
                progress.record(IterError::Cancelled(reason));
                return;
            }
            match panic::catch_unwind(AssertUnwindSafe(|| action(element))) {
                Ok(Ok(())) => {}
                Ok(Err(error)) => progress.record(IterError::Action(error)),
                Err(payload) => progress.record_panic(payload),
            }
        });
        dispatched += 1;
        help_while_backlogged(progress);
    }
    dispatched
}

fn joined<E>(dispatched: usize, progress: Progress<IterError<E>>) -> Result<(), IterError<E>> {
    let outcome = progress.into_result();
    tracing::debug!(dispatched, failed = outcome.is_err(), "concurrent traversal joined");
    outcome
}

/// Runs `action` concurrently on each element of `sequence`, using the
/// global rayon pool.
///
/// One job is spawned per element and all jobs are joined before returning.
/// `action` is called from several threads at once and is never serialized;
/// state it shares must be synchronized by the caller.
///
/// # Errors
///
/// - [`IterError::NilSequence`] / [`IterError::NilAction`] for absent inputs;
///   no action is invoked.
/// - [`IterError::Cancelled`] when the token is observed cancelled.
/// - [`IterError::Action`] with an error returned by `action`.
///
/// When several jobs fail, exactly one of their errors is returned.
///
/// # Panics
///
/// A panic inside `action` is propagated once every job has finished.
///
/// # Examples
///
/// ```rust
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use lambars_iter::cancel::Never;
/// use lambars_iter::traverse::for_each_concurrent;
///
/// let total = AtomicU64::new(0);
/// let result = for_each_concurrent(&Never, Some(1..=1000_u64), Some(|value: u64| {
///     total.fetch_add(value * value, Ordering::Relaxed);
///     Ok::<(), ()>(())
/// }));
///
/// assert!(result.is_ok());
/// assert_eq!(total.load(Ordering::Relaxed), 333_833_500);
/// ```
pub fn for_each_concurrent<C, I, F, E>(
    cancellation: &C,
    sequence: Option<I>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + Sync + ?Sized,
    I: IntoIterator,
    I::IntoIter: Send,
    I::Item: Send,
    F: Fn(I::Item) -> Result<(), E> + Sync,
    E: Send,
{
    let (sequence, action) = unpack(sequence, action)?;
    let sequence = sequence.into_iter();
    let progress = Progress::new();
    let dispatched =
        rayon::scope(|scope| fan_out(scope, cancellation, sequence, &action, &progress));
    joined(dispatched, progress)
}

/// Same as [`for_each_concurrent`], but runs the jobs on `pool`.
///
/// Use a dedicated pool to bound the parallelism of a traversal or to keep it
/// off the global pool.
///
/// # Errors
///
/// See [`for_each_concurrent`].
///
/// # Panics
///
/// A panic inside `action` is propagated once every job has finished.
pub fn for_each_concurrent_in<C, I, F, E>(
    pool: &ThreadPool,
    cancellation: &C,
    sequence: Option<I>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + Sync + ?Sized,
    I: IntoIterator,
    I::IntoIter: Send,
    I::Item: Send,
    F: Fn(I::Item) -> Result<(), E> + Sync,
    E: Send,
{
    let (sequence, action) = unpack(sequence, action)?;
    let sequence = sequence.into_iter();
    let progress = Progress::new();
    let dispatched =
        pool.scope(|scope| fan_out(scope, cancellation, sequence, &action, &progress));
    joined(dispatched, progress)
}

/// Runs `action` concurrently on each pair of `sequence`.
///
/// Behaves exactly like [`for_each_concurrent`] with the pair split into two
/// arguments.
///
/// # Errors
///
/// See [`for_each_concurrent`].
///
/// # Panics
///
/// A panic inside `action` is propagated once every job has finished.
pub fn for_each_concurrent_keyed<C, I, K, V, F, E>(
    cancellation: &C,
    sequence: Option<I>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + Sync + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    I::IntoIter: Send,
    K: Send,
    V: Send,
    F: Fn(K, V) -> Result<(), E> + Sync,
    E: Send,
{
    for_each_concurrent(
        cancellation,
        sequence,
        action.map(|action| move |(key, value): (K, V)| action(key, value)),
    )
}

/// Same as [`for_each_concurrent_keyed`], but runs the jobs on `pool`.
///
/// # Errors
///
/// See [`for_each_concurrent`].
///
/// # Panics
///
/// A panic inside `action` is propagated once every job has finished.
pub fn for_each_concurrent_keyed_in<C, I, K, V, F, E>(
    pool: &ThreadPool,
    cancellation: &C,
    sequence: Option<I>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + Sync + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    I::IntoIter: Send,
    K: Send,
    V: Send,
    F: Fn(K, V) -> Result<(), E> + Sync,
    E: Send,
{
    for_each_concurrent_in(
        pool,
        cancellation,
        sequence,
        action.map(|action| move |(key, value): (K, V)| action(key, value)),
    )
}
