//! Tokio-backed executor and parallel spawning.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! rop-rail = { version = "0.3", features = ["async-tokio"] }
//! ```

use core::future::Future;

use futures_util::future::join_all;
use tokio::runtime::Handle;
use tokio::task::JoinError;

use crate::effect::{Fault, TaskExecutor, TaskHandle};
use crate::types::Outcome;

use super::parallel::gather;

/// Runs effect jobs on a Tokio runtime's blocking pool.
///
/// # Examples
///
/// ```
/// use rop_rail::async_ext::TokioExecutor;
/// use rop_rail::effect::{EffectExecutor, NoopLogger};
/// use rop_rail::Outcome;
///
/// #[tokio::main]
/// async fn main() {
///     let effects = EffectExecutor::new(TokioExecutor::current());
///     let saved = effects
///         .run_effect(5_u32, |_| Ok::<_, &str>(()), |f| f.to_string(), "save", NoopLogger)
///         .await;
///     assert_eq!(saved, Outcome::success(5));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    #[inline]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime the caller is running on.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime; see
    /// [`try_current`](Self::try_current).
    #[inline]
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    #[inline]
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    #[inline]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl TaskExecutor for TokioExecutor {
    fn spawn<T, F>(&self, job: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let join = self.handle.spawn_blocking(job);
        TaskHandle::new(async move { join.await.map_err(join_fault) })
    }
}

/// Converts a failed join into a [`Fault`].
fn join_fault(error: JoinError) -> Fault {
    if error.is_panic() {
        Fault::from_panic(error.into_panic())
    } else {
        Fault::lost(format!("task did not complete: {error}"))
    }
}

/// [`run_in_parallel`](super::run_in_parallel) with each task spawned onto
/// the current Tokio runtime, so tasks can make progress on several worker
/// threads at once.
///
/// A task that panics or is cancelled is reported through `on_fault` and
/// counted as a failure; the remaining tasks still run to completion.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime.
///
/// # Examples
///
/// ```
/// use rop_rail::async_ext::spawn_in_parallel;
/// use rop_rail::Outcome;
///
/// #[tokio::main]
/// async fn main() {
///     let outcome = spawn_in_parallel(
///         21_u32,
///         [1_u32, 2].map(|k| move |n: u32| async move { Outcome::<_, String>::success(n * k) }),
///         |errors| errors.join(", "),
///         |fault| fault.to_string(),
///     )
///     .await;
///     assert_eq!(outcome, Outcome::success(vec![21, 42]));
/// }
/// ```
pub async fn spawn_in_parallel<I, T, E, F, Fut, Tasks, C, M>(
    input: I,
    tasks: Tasks,
    error_combiner: C,
    on_fault: M,
) -> Outcome<Vec<T>, E>
where
    I: Clone,
    Tasks: IntoIterator<Item = F>,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    C: FnOnce(Vec<E>) -> E,
    M: Fn(Fault) -> E,
{
    let joins = tasks.into_iter().map(|task| tokio::spawn(task(input.clone())));

    let outcomes = join_all(joins)
        .await
        .into_iter()
        .map(|joined| match joined {
            Ok(outcome) => outcome,
            Err(error) => Outcome::Failure(on_fault(join_fault(error))),
        })
        .collect();
    gather(outcomes, error_combiner)
}
