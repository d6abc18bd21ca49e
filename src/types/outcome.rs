use core::future::Future;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::state_error::{StateError, Variant};

/// A two-variant value holding either a success value or a failure error.
///
/// `Outcome<T, E>` is the rail every pipeline stage travels on. It mirrors
/// [`core::result::Result`] but keeps the railway vocabulary (`map`,
/// `flat_map`, `map_failure`, `fold`) and treats reading the absent side as an
/// invariant violation: the checked accessors return
/// [`StateError::WrongVariant`] instead of a default.
///
/// Conversions to and from `Result` are provided through [`From`], so an
/// `Outcome` can be dropped into `?`-based code at any boundary.
///
/// # Examples
///
/// ```
/// use rop_rail::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::success(21);
/// let doubled = parsed.map(|n| n * 2);
/// assert_eq!(doubled.into_value(), Ok(42));
///
/// let failed: Outcome<i32, String> = Outcome::failure("bad input".to_string());
/// let message = failed.fold(|e| format!("error: {e}"), |n| n.to_string());
/// assert_eq!(message, "error: bad input");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a success value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure error.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    #[inline]
    fn variant(&self) -> Variant {
        match self {
            Self::Success(_) => Variant::Success,
            Self::Failure(_) => Variant::Failure,
        }
    }

    /// Borrows the success value.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::WrongVariant`] when called on a `Failure`.
    #[inline]
    pub fn value(&self) -> Result<&T, StateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(StateError::wrong_variant(Variant::Success, self.variant())),
        }
    }

    /// Borrows the failure error.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::WrongVariant`] when called on a `Success`.
    #[inline]
    pub fn error(&self) -> Result<&E, StateError> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) => Err(StateError::wrong_variant(Variant::Failure, self.variant())),
        }
    }

    /// Takes the success value.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::WrongVariant`] when called on a `Failure`.
    #[inline]
    pub fn into_value(self) -> Result<T, StateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => {
                Err(StateError::wrong_variant(Variant::Success, Variant::Failure))
            },
        }
    }

    /// Takes the failure error.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::WrongVariant`] when called on a `Success`.
    #[inline]
    pub fn into_error(self) -> Result<E, StateError> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) => {
                Err(StateError::wrong_variant(Variant::Failure, Variant::Success))
            },
        }
    }

    /// Converts into an `Option` of the success value, discarding any error.
    #[must_use]
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the error, discarding any success value.
    #[must_use]
    #[inline]
    pub fn failure_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `f` to the success value.
    ///
    /// On `Failure` the error is passed through and `f` is never called. A
    /// panic inside `f` is not caught here; use
    /// [`EffectExecutor`](crate::effect::EffectExecutor) when `f` may fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("nope");
    /// assert_eq!(failed.map(|n| n + 1), Outcome::failure("nope"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a dependent computation, short-circuiting on `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(half).flat_map(half), Outcome::success(2));
    /// assert_eq!(Outcome::success(6).flat_map(half).flat_map(half), Outcome::failure("odd"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(f)
    }

    /// Translates the error channel without touching a success value.
    ///
    /// Used to cross error-type boundaries between layers.
    #[inline]
    pub fn map_failure<E2, G>(self, g: G) -> Outcome<T, E2>
    where
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(g(error)),
        }
    }

    /// Chains an asynchronous computation.
    ///
    /// On `Failure` the returned future resolves on its first poll without
    /// calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// # async fn demo() {
    /// let looked_up = Outcome::<u32, &str>::success(7)
    ///     .flat_map_async(|id| async move { Outcome::success(format!("user-{id}")) })
    ///     .await;
    /// assert_eq!(looked_up, Outcome::success("user-7".to_string()));
    /// # }
    /// ```
    pub fn flat_map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        async move {
            match self {
                Self::Success(value) => f(value).await,
                Self::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    /// Reduces to a single value; exactly one of the two functions runs.
    #[inline]
    pub fn fold<U, FF, FS>(self, on_failure: FF, on_success: FS) -> U
    where
        FF: FnOnce(E) -> U,
        FS: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Turns a `Failure` back into a `Success` using `f(error)`.
    #[inline]
    pub fn recover<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Success(f(error)),
        }
    }

    /// Fails with `error` when the success value does not satisfy `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P, error: E) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) if !predicate(&value) => Outcome::Failure(error),
            other => other,
        }
    }

    /// Calls `action` with the success value, leaving the outcome unchanged.
    #[inline]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` with the error, leaving the outcome unchanged.
    #[inline]
    pub fn inspect_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
