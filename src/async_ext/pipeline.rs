//! Async pipeline, the deferred counterpart of [`Pipeline`](crate::Pipeline).

use core::future::{Future, IntoFuture, Ready};

use crate::types::pipeline::apply_validation;
use crate::types::Outcome;
use crate::validation::Validation;

/// Builder over a future that resolves to an [`Outcome`].
///
/// Each combinator wraps the previous future and returns a new
/// `AsyncPipeline`; nothing runs until the pipeline is awaited. Steps run in
/// the order they were chained and each waits for the previous one, so a
/// `peek_async` action has finished before the next step starts. As with the
/// sync pipeline, a failed outcome skips every step except `recover`,
/// `on_failure` and `map_failure`.
///
/// `AsyncPipeline` implements [`IntoFuture`], so it can be awaited directly.
///
/// # Examples
///
/// ```
/// use rop_rail::async_ext::AsyncPipeline;
/// use rop_rail::Outcome;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let greeting = AsyncPipeline::start::<_, String>("ana")
///     .map(|name| name.to_uppercase())
///     .flat_map_async(|name| async move { Outcome::success(format!("hello, {name}")) })
///     .await;
///
/// assert_eq!(greeting, Outcome::success("hello, ANA".to_string()));
/// # });
/// ```
#[must_use = "pipelines do nothing unless awaited"]
#[derive(Debug, Clone)]
pub struct AsyncPipeline<Fut> {
    future: Fut,
}

impl<Fut> AsyncPipeline<Fut> {
    /// Wraps a future that resolves to an [`Outcome`].
    #[inline]
    pub fn from_future(future: Fut) -> Self {
        Self { future }
    }
}

impl AsyncPipeline<()> {
    /// Starts an already-succeeded pipeline.
    #[inline]
    pub fn start<T, E>(value: T) -> AsyncPipeline<Ready<Outcome<T, E>>> {
        Self::from_outcome(Outcome::Success(value))
    }

    /// Starts an already-failed pipeline.
    #[inline]
    pub fn failure<T, E>(error: E) -> AsyncPipeline<Ready<Outcome<T, E>>> {
        Self::from_outcome(Outcome::Failure(error))
    }

    /// Starts from an outcome that is already known.
    #[inline]
    pub fn from_outcome<T, E>(outcome: Outcome<T, E>) -> AsyncPipeline<Ready<Outcome<T, E>>> {
        AsyncPipeline { future: core::future::ready(outcome) }
    }
}

impl<Fut, T, E> AsyncPipeline<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    /// Runs `validator` on the value; on `Invalid` fails with the first
    /// message passed through `error_mapper`.
    pub fn validate<M, V, F>(
        self,
        validator: V,
        error_mapper: F,
    ) -> AsyncPipeline<impl Future<Output = Outcome<T, E>>>
    where
        V: FnOnce(T) -> Validation<T, M>,
        F: FnOnce(M) -> E,
    {
        let future = self.future;
        AsyncPipeline::from_future(async move {
            apply_validation(future.await, validator, error_mapper)
        })
    }

    pub fn map<U, F>(self, f: F) -> AsyncPipeline<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> U,
    {
        let future = self.future;
        AsyncPipeline::from_future(async move { future.await.map(f) })
    }

    pub fn flat_map<U, F>(self, f: F) -> AsyncPipeline<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        let future = self.future;
        AsyncPipeline::from_future(async move { future.await.flat_map(f) })
    }

    /// Chains an asynchronous step that may fail.
    pub fn flat_map_async<U, F, Fut2>(
        self,
        f: F,
    ) -> AsyncPipeline<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> Fut2,
        Fut2: Future<Output = Outcome<U, E>>,
    {
        let future = self.future;
        AsyncPipeline::from_future(async move { future.await.flat_map_async(f).await })
    }

    pub fn peek<F>(self, action: F) -> AsyncPipeline<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(&T),
    {
        let future = self.future;
        AsyncPipeline::from_future(async move { future.await.inspect(action) })
    }

    /// Awaits `action` on the success value, then continues with the same
    /// value.
    ///
    /// The future returned by `action` may not borrow the value; clone what
    /// it needs before the `async` block.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use rop_rail::async_ext::AsyncPipeline;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let sent = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&sent);
    ///
    /// let outcome = AsyncPipeline::start::<_, ()>(3)
    ///     .peek_async(move |n| {
    ///         let n = *n;
    ///         async move {
    ///             counter.fetch_add(n, Ordering::SeqCst);
    ///         }
    ///     })
    ///     .await;
    ///
    /// assert_eq!(outcome.into_value(), Ok(3));
    /// assert_eq!(sent.load(Ordering::SeqCst), 3);
    /// # });
    /// ```
    pub fn peek_async<F, Fut2>(
        self,
        action: F,
    ) -> AsyncPipeline<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = ()>,
    {
        let future = self.future;
        AsyncPipeline::from_future(async move {
            let outcome = future.await;
            if let Outcome::Success(value) = &outcome {
                action(value).await;
            }
            outcome
        })
    }

    pub fn filter<P>(
        self,
        predicate: P,
        error: E,
    ) -> AsyncPipeline<impl Future<Output = Outcome<T, E>>>
    where
        P: FnOnce(&T) -> bool,
    {
        let future = self.future;
        AsyncPipeline::from_future(async move { future.await.filter(predicate, error) })
    }

    pub fn recover<F>(self, f: F) -> AsyncPipeline<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(E) -> T,
    {
        let future = self.future;
        AsyncPipeline::from_future(async move { future.await.recover(f) })
    }

    /// Alias for [`peek`](Self::peek).
    #[inline]
    pub fn on_success<F>(self, action: F) -> AsyncPipeline<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(&T),
    {
        self.peek(action)
    }

    pub fn on_failure<F>(self, action: F) -> AsyncPipeline<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(&E),
    {
        let future = self.future;
        AsyncPipeline::from_future(async move { future.await.inspect_failure(action) })
    }

    pub fn map_failure<E2, G>(self, g: G) -> AsyncPipeline<impl Future<Output = Outcome<T, E2>>>
    where
        G: FnOnce(E) -> E2,
    {
        let future = self.future;
        AsyncPipeline::from_future(async move { future.await.map_failure(g) })
    }

    /// Reduces the eventual outcome to one value.
    pub async fn fold_async<U, FF, FS>(self, on_failure: FF, on_success: FS) -> U
    where
        FF: FnOnce(E) -> U,
        FS: FnOnce(T) -> U,
    {
        self.future.await.fold(on_failure, on_success)
    }

    /// Hands the eventual outcome to `consumer`.
    pub async fn then_accept<F>(self, consumer: F)
    where
        F: FnOnce(Outcome<T, E>),
    {
        consumer(self.future.await)
    }

    /// Returns the underlying future.
    #[inline]
    pub fn build(self) -> Fut {
        self.future
    }
}

impl<Fut, T, E> IntoFuture for AsyncPipeline<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    type Output = Outcome<T, E>;
    type IntoFuture = Fut;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        self.future
    }
}
