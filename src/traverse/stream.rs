//! Traversal of asynchronous streams.
//!
//! The sequential form awaits each action in turn. The concurrent form spawns
//! one tokio task per element into a [`JoinSet`] and joins every task before
//! returning, following the same dispatch rules as the rayon-based
//! traversal: the producer stops once a failure has been observed or the
//! token is cancelled, and each task polls the token before its action.
//! The producer spends tokio's cooperative budget on every dispatch, so
//! spawned tasks get to run even on a current-thread runtime.

use std::any::Any;
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::task::{JoinError, JoinSet};

use super::unpack;
use crate::IterError;
use crate::cancel::Cancellation;

type Joined<E> = Result<Result<(), IterError<E>>, JoinError>;

/// Outcome of the tasks joined so far.
struct Settled<E> {
    first_error: Option<IterError<E>>,
    panic: Option<Box<dyn Any + Send>>,
}

impl<E> Settled<E> {
    const fn new() -> Self {
        Self {
            first_error: None,
            panic: None,
        }
    }

    fn absorb(&mut self, joined: Joined<E>) {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                if self.first_error.is_none() {
                    self.first_error = Some(error);
                }
            }
            Err(join_error) => {
                if join_error.is_panic() && self.panic.is_none() {
                    self.panic = Some(join_error.into_panic());
                }
            }
        }
    }

    const fn is_failed(&self) -> bool {
        self.first_error.is_some() || self.panic.is_some()
    }
}

/// Runs `action` on each element of `stream`, awaiting each in order.
///
/// # Errors
///
/// - [`IterError::NilSequence`] / [`IterError::NilAction`] for absent inputs.
/// - [`IterError::Cancelled`] when the token is cancelled before an action runs.
/// - [`IterError::Action`] with the first error returned by `action`.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::cancel::Never;
/// use lambars_iter::traverse::for_each_async;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut seen = Vec::new();
/// let result = for_each_async(&Never, Some(futures::stream::iter(1..=3)), Some(|value: i32| {
///     seen.push(value);
///     async { Ok::<(), ()>(()) }
/// }))
/// .await;
/// assert!(result.is_ok());
/// assert_eq!(seen, vec![1, 2, 3]);
/// # });
/// ```
pub async fn for_each_async<C, S, F, Fut, E>(
    cancellation: &C,
    stream: Option<S>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + ?Sized,
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let (stream, mut action) = unpack(stream, action)?;
    let mut stream = pin!(stream);
    let mut visited = 0_usize;
    while let Some(element) = stream.next().await {
        if let Some(reason) = cancellation.cancelled() {
            tracing::debug!(visited, %reason, "sequential stream traversal cancelled");
            return Err(IterError::Cancelled(reason));
        }
        action(element).await.map_err(IterError::Action)?;
        visited += 1;
    }
    Ok(())
}

/// Runs `action` on each pair of `stream`, awaiting each in order.
///
/// # Errors
///
/// See [`for_each_async`].
pub async fn for_each_keyed_async<C, S, K, V, F, Fut, E>(
    cancellation: &C,
    stream: Option<S>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + ?Sized,
    S: Stream<Item = (K, V)>,
    F: FnMut(K, V) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    for_each_async(
        cancellation,
        stream,
        action.map(|mut action| move |(key, value): (K, V)| action(key, value)),
    )
    .await
}

/// Runs `action` concurrently on each element of `stream`, one tokio task per
/// element.
///
/// Every spawned task is joined before the returned future completes. When
/// several tasks fail, exactly one of their errors is returned.
///
/// # Errors
///
/// - [`IterError::NilSequence`] / [`IterError::NilAction`] for absent inputs.
/// - [`IterError::Cancelled`] when the token is observed cancelled.
/// - [`IterError::Action`] with an error returned by `action`.
///
/// # Panics
///
/// Must be polled inside a tokio runtime. A panicking task is re-raised after
/// the remaining tasks have been joined.
pub async fn for_each_concurrent_async<C, S, F, Fut, E>(
    cancellation: C,
    stream: Option<S>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + Clone + Send + Sync + 'static,
    S: Stream,
    S::Item: Send + 'static,
    F: Fn(S::Item) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: Send + 'static,
{
    let (stream, action) = unpack(stream, action)?;
    let action = Arc::new(action);
    let mut stream = pin!(stream);
    let mut units = JoinSet::new();
    let mut settled = Settled::new();
    let mut dispatched = 0_usize;

    while let Some(element) = stream.next().await {
        while let Some(joined) = units.try_join_next() {
            settled.absorb(joined);
        }
        if settled.is_failed() {
            tracing::debug!(dispatched, "concurrent stream traversal stopped dispatching after a failure");
            break;
        }
        if let Some(reason) = cancellation.cancelled() {
            tracing::debug!(dispatched, %reason, "concurrent stream traversal stopped dispatching");
            settled.absorb(Ok(Err(IterError::Cancelled(reason))));
            break;
        }

        let cancellation = cancellation.clone();
        let action = Arc::clone(&action);
        units.spawn(async move {
            if let Some(reason) = cancellation.cancelled() {
                return Err(IterError::Cancelled(reason));
            }
            (*action)(element).await.map_err(IterError::Action)
        });
        dispatched += 1;
        tokio::task::consume_budget().await;
    }

    while let Some(joined) = units.join_next().await {
        settled.absorb(joined);
    }
    if let Some(payload) = settled.panic {
        std::panic::resume_unwind(payload);
    }
    tracing::debug!(
        dispatched,
        failed = settled.first_error.is_some(),
        "concurrent stream traversal joined"
    );
    settled.first_error.map_or(Ok(()), Err)
}

/// Runs `action` concurrently on each pair of `stream`, one tokio task per pair.
///
/// # Errors
///
/// See [`for_each_concurrent_async`].
///
/// # Panics
///
/// See [`for_each_concurrent_async`].
pub async fn for_each_concurrent_keyed_async<C, S, K, V, F, Fut, E>(
    cancellation: C,
    stream: Option<S>,
    action: Option<F>,
) -> Result<(), IterError<E>>
where
    C: Cancellation + Clone + Send + Sync + 'static,
    S: Stream<Item = (K, V)>,
    K: Send + 'static,
    V: Send + 'static,
    F: Fn(K, V) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: Send + 'static,
{
    for_each_concurrent_async(
        cancellation,
        stream,
        action.map(|action| move |(key, value): (K, V)| action(key, value)),
    )
    .await
}
