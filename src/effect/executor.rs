use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::Arc;

use crate::effect::fault::{self, Fault};

/// Where blocking effect bodies are run.
///
/// `spawn` must accept jobs from several threads at once and must not run
/// two jobs on the caller's stack in a way that blocks it indefinitely.
/// Which thread runs the job is up to the implementation.
pub trait TaskExecutor: Send + Sync {
    /// Submits `job` and returns a handle that resolves to its result.
    ///
    /// A panic inside `job`, or the job being dropped, resolves the handle to
    /// a [`Fault`] instead.
    fn spawn<T, F>(&self, job: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static;
}

impl<X: TaskExecutor + ?Sized> TaskExecutor for &X {
    #[inline]
    fn spawn<T, F>(&self, job: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        (**self).spawn(job)
    }
}

impl<X: TaskExecutor + ?Sized> TaskExecutor for Arc<X> {
    #[inline]
    fn spawn<T, F>(&self, job: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        (**self).spawn(job)
    }
}

/// Future for a job submitted to a [`TaskExecutor`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct TaskHandle<T> {
    inner: Pin<Box<dyn Future<Output = Result<T, Fault>> + Send + 'static>>,
}

impl<T> TaskHandle<T> {
    /// Wraps any future that resolves to the job's result.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, Fault>> + Send + 'static,
    {
        Self { inner: Box::pin(future) }
    }

    /// A handle that is already resolved.
    pub fn ready(result: Result<T, Fault>) -> Self
    where
        T: Send + 'static,
    {
        Self::new(core::future::ready(result))
    }
}

impl<T> Future for TaskHandle<T> {
    type Output = Result<T, Fault>;

    #[inline]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for TaskHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle").finish_non_exhaustive()
    }
}

/// Runs each job immediately on the submitting thread.
///
/// Meant for tests and single-threaded tools only: the effect blocks the
/// caller, including an async task that submits it. Services should use
/// [`TokioExecutor`](crate::async_ext::TokioExecutor) (feature
/// `async-tokio`) or their own pool. The returned handle is already
/// resolved, so the effect has finished and been logged by the time
/// `spawn` returns.
///
/// # Examples
///
/// ```
/// use rop_rail::effect::{InlineExecutor, TaskExecutor};
///
/// let handle = InlineExecutor.spawn(|| 40 + 2);
/// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// assert_eq!(runtime.block_on(handle).unwrap(), 42);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl TaskExecutor for InlineExecutor {
    fn spawn<T, F>(&self, job: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        TaskHandle::ready(fault::catch(|| Ok(job())))
    }
}
