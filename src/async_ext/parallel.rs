//! Fail-slow parallel aggregation.
//!
//! [`run_in_parallel`] starts every task on the same input, waits for all of
//! them, and reports either every value (in submission order) or every error
//! folded into one by a combiner. One task failing never cancels the others.

use core::any::Any;
use core::future::Future;

use futures_util::future::join_all;
pub use futures_util::future::BoxFuture;

use crate::types::alloc_type::{Box, Vec};
use crate::types::Outcome;

/// Task value with its type erased.
pub type AnyValue = Box<dyn Any + Send>;

/// A task whose value type has been erased so that tasks producing
/// different types can share one list.
pub type ErasedTask<'a, I, E> = Box<dyn FnOnce(I) -> BoxFuture<'a, Outcome<AnyValue, E>> + Send + 'a>;

/// Splits finished outcomes into all values or the combined errors.
pub(crate) fn gather<T, E, C>(outcomes: Vec<Outcome<T, E>>, error_combiner: C) -> Outcome<Vec<T>, E>
where
    C: FnOnce(Vec<E>) -> E,
{
    let mut values = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        Outcome::Success(values)
    } else {
        Outcome::Failure(error_combiner(errors))
    }
}

/// Runs every task on a clone of `input` concurrently and waits for all of
/// them.
///
/// Resolves to `Success` with the values in task order when every task
/// succeeds. Otherwise resolves to `Failure(error_combiner(errors))`, where
/// `errors` holds every failure in task order; the combiner is called once
/// and only when at least one task failed. An empty task list succeeds with
/// an empty `Vec`.
///
/// The tasks are polled on the awaiting task. Use
/// [`spawn_in_parallel`](crate::async_ext::spawn_in_parallel) to spread them
/// over a runtime's worker threads.
///
/// # Examples
///
/// ```
/// use rop_rail::async_ext::run_in_parallel;
/// use rop_rail::Outcome;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let failed = run_in_parallel(
///     "order-1",
///     ["E1", "E2"].map(|code| {
///         move |_: &str| async move { Outcome::<u32, String>::failure(code.to_string()) }
///     }),
///     |errors| errors.join(", "),
/// )
/// .await;
///
/// assert_eq!(failed, Outcome::failure("E1, E2".to_string()));
/// # });
/// ```
pub async fn run_in_parallel<I, T, E, F, Fut, Tasks, C>(
    input: I,
    tasks: Tasks,
    error_combiner: C,
) -> Outcome<Vec<T>, E>
where
    I: Clone,
    Tasks: IntoIterator<Item = F>,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
    C: FnOnce(Vec<E>) -> E,
{
    let outcomes = join_all(tasks.into_iter().map(|task| task(input.clone()))).await;
    gather(outcomes, error_combiner)
}

/// Erases the value type of `task` so it can sit in a list with tasks of
/// other types.
///
/// Values come back from [`run_in_parallel_erased`] as [`AnyValue`]; use
/// `downcast` to recover them.
pub fn erase<'a, I, T, E, F, Fut>(task: F) -> ErasedTask<'a, I, E>
where
    F: FnOnce(I) -> Fut + Send + 'a,
    Fut: Future<Output = Outcome<T, E>> + Send + 'a,
    T: Any + Send,
    E: 'a,
{
    Box::new(move |input: I| -> BoxFuture<'a, Outcome<AnyValue, E>> {
        let future = task(input);
        Box::pin(async move { future.await.map(|value| Box::new(value) as AnyValue) })
    })
}

/// [`run_in_parallel`] over tasks with different value types.
///
/// # Examples
///
/// ```
/// use rop_rail::async_ext::{erase, run_in_parallel_erased};
/// use rop_rail::Outcome;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let outcome = run_in_parallel_erased(
///     7_u32,
///     vec![
///         erase(|id: u32| async move { Outcome::<_, String>::success(format!("user-{id}")) }),
///         erase(|id: u32| async move { Outcome::<_, String>::success(id * 100) }),
///     ],
///     |errors| errors.join(", "),
/// )
/// .await;
///
/// let mut values = outcome.into_value().unwrap().into_iter();
/// assert_eq!(*values.next().unwrap().downcast::<String>().unwrap(), "user-7");
/// assert_eq!(*values.next().unwrap().downcast::<u32>().unwrap(), 700);
/// # });
/// ```
pub async fn run_in_parallel_erased<'a, I, E, C>(
    input: I,
    tasks: Vec<ErasedTask<'a, I, E>>,
    error_combiner: C,
) -> Outcome<Vec<AnyValue>, E>
where
    I: Clone,
    C: FnOnce(Vec<E>) -> E,
{
    run_in_parallel(input, tasks, error_combiner).await
}
