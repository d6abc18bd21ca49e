#[cfg(feature = "async")]
use core::future::Future;

use crate::types::Outcome;
use crate::validation::Validation;

/// A synchronous builder that threads one [`Outcome`] through a chain of
/// validation, mapping, side-effect, filtering and recovery steps.
///
/// `Pipeline` has two states, succeeded and failed. Once failed, every
/// `validate`, `map`, `flat_map`, `peek` and `filter` step is skipped and its
/// closure is never called; [`recover`](Pipeline::recover) is the only step
/// that moves back to succeeded.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use rop_rail::{Outcome, Pipeline};
///
/// let outcome = Pipeline::<i32, &str>::start(10)
///     .filter(|n| *n > 5, "too small")
///     .map(|n| n * 2)
///     .flat_map(|n| if n < 100 { Outcome::success(n) } else { Outcome::failure("too big") })
///     .build();
///
/// assert_eq!(outcome, Outcome::success(20));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline<T, E> {
    outcome: Outcome<T, E>,
}

impl<T, E> Pipeline<T, E> {
    /// Starts a succeeded pipeline from `value`.
    #[inline]
    pub fn start(value: T) -> Self {
        Self { outcome: Outcome::Success(value) }
    }

    /// Starts a failed pipeline from `error`.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self { outcome: Outcome::Failure(error) }
    }

    /// Wraps an existing outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Outcome, Pipeline};
    ///
    /// let pipeline = Pipeline::from_outcome(Outcome::<i32, &str>::failure("boom"));
    /// assert!(pipeline.is_failure());
    /// ```
    #[inline]
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        Self { outcome }
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }

    /// Runs `validator` on the current value.
    ///
    /// A failed pipeline is passed through untouched. On `Invalid` the
    /// pipeline fails with `error_mapper` applied to the **first** message; on
    /// `Valid` it continues with the validated value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::validation::Validation;
    /// use rop_rail::Pipeline;
    ///
    /// let outcome = Pipeline::<String, String>::start("".to_string())
    ///     .validate(
    ///         |name| {
    ///             if name.is_empty() {
    ///                 Validation::invalid("name is empty")
    ///             } else {
    ///                 Validation::valid(name)
    ///             }
    ///         },
    ///         |message| format!("validation: {message}"),
    ///     )
    ///     .build();
    ///
    /// assert_eq!(outcome.into_error(), Ok("validation: name is empty".to_string()));
    /// ```
    #[inline]
    pub fn validate<M, V, F>(self, validator: V, error_mapper: F) -> Pipeline<T, E>
    where
        V: FnOnce(T) -> Validation<T, M>,
        F: FnOnce(M) -> E,
    {
        Pipeline { outcome: apply_validation(self.outcome, validator, error_mapper) }
    }

    /// Transforms the success value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pipeline<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Pipeline { outcome: self.outcome.map(f) }
    }

    /// Chains a step that may fail.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Pipeline<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        Pipeline { outcome: self.outcome.flat_map(f) }
    }

    /// Chains an asynchronous step, turning this pipeline into an
    /// [`AsyncPipeline`](crate::async_ext::AsyncPipeline).
    #[cfg(feature = "async")]
    #[inline]
    pub fn flat_map_async<U, F, Fut>(
        self,
        f: F,
    ) -> crate::async_ext::AsyncPipeline<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        crate::async_ext::AsyncPipeline::from_future(self.outcome.flat_map_async(f))
    }

    /// Lifts this pipeline into an [`AsyncPipeline`](crate::async_ext::AsyncPipeline)
    /// that is already resolved.
    #[cfg(feature = "async")]
    #[inline]
    pub fn into_async(
        self,
    ) -> crate::async_ext::AsyncPipeline<impl Future<Output = Outcome<T, E>>> {
        crate::async_ext::AsyncPipeline::from_outcome(self.outcome)
    }

    /// Calls `action` with the success value without changing it.
    ///
    /// A panic inside `action` is not caught by the pipeline.
    #[inline]
    pub fn peek<F>(self, action: F) -> Pipeline<T, E>
    where
        F: FnOnce(&T),
    {
        Pipeline { outcome: self.outcome.inspect(action) }
    }

    /// Fails with `error` when the success value does not satisfy `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P, error: E) -> Pipeline<T, E>
    where
        P: FnOnce(&T) -> bool,
    {
        Pipeline { outcome: self.outcome.filter(predicate, error) }
    }

    /// Turns a failure back into a success with `f(error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Outcome, Pipeline};
    ///
    /// let outcome = Pipeline::<String, &str>::failure("ERROR")
    ///     .recover(|_| "Recovered".to_string())
    ///     .build();
    /// assert_eq!(outcome, Outcome::success("Recovered".to_string()));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Pipeline<T, E>
    where
        F: FnOnce(E) -> T,
    {
        Pipeline { outcome: self.outcome.recover(f) }
    }

    /// Alias for [`peek`](Self::peek).
    #[inline]
    pub fn on_success<F>(self, action: F) -> Pipeline<T, E>
    where
        F: FnOnce(&T),
    {
        self.peek(action)
    }

    /// Calls `action` with the error without changing it.
    #[inline]
    pub fn on_failure<F>(self, action: F) -> Pipeline<T, E>
    where
        F: FnOnce(&E),
    {
        Pipeline { outcome: self.outcome.inspect_failure(action) }
    }

    /// Translates the error type.
    #[inline]
    pub fn map_failure<E2, G>(self, g: G) -> Pipeline<T, E2>
    where
        G: FnOnce(E) -> E2,
    {
        Pipeline { outcome: self.outcome.map_failure(g) }
    }

    /// Reduces the pipeline to a single value.
    #[inline]
    pub fn fold<U, FF, FS>(self, on_failure: FF, on_success: FS) -> U
    where
        FF: FnOnce(E) -> U,
        FS: FnOnce(T) -> U,
    {
        self.outcome.fold(on_failure, on_success)
    }

    /// Returns the underlying outcome.
    #[inline]
    pub fn build(self) -> Outcome<T, E> {
        self.outcome
    }
}

impl<T, E> From<Outcome<T, E>> for Pipeline<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::from_outcome(outcome)
    }
}

/// Shared `validate` transition for the sync and async pipelines.
#[inline]
pub(crate) fn apply_validation<T, E, M, V, F>(
    outcome: Outcome<T, E>,
    validator: V,
    error_mapper: F,
) -> Outcome<T, E>
where
    V: FnOnce(T) -> Validation<T, M>,
    F: FnOnce(M) -> E,
{
    match outcome {
        Outcome::Success(value) => {
            validator(value).into_outcome(|messages| error_mapper(messages.into_first()))
        },
        failed => failed,
    }
}
