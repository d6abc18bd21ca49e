use crate::types::alloc_type::String;
use crate::types::state_error::{StateError, Variant};
use crate::types::Outcome;
use crate::validation::messages::Messages;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validation that accumulates every message instead of failing fast.
///
/// `Validation<T, M>` is either a validated value or a non-empty, ordered list
/// of messages (plain `String`s by default). Where [`Outcome::flat_map`] stops
/// at the first failure, [`combine`](Validation::combine) walks every entry so
/// all problems are reported together.
///
/// # Type Parameters
///
/// * `T` - The validated value
/// * `M` - The message type, `String` unless stated otherwise
///
/// # Examples
///
/// ```
/// use rop_rail::validation::Validation;
///
/// let ok: Validation<u8> = Validation::valid(30);
/// assert!(ok.is_valid());
///
/// let bad: Validation<u8> = Validation::invalid("age must be at least 18".to_string());
/// assert_eq!(bad.errors().unwrap().first(), "age must be at least 18");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Validation<T, M = String> {
    Valid(T),
    Invalid(Messages<M>),
}

impl<T, M> Validation<T, M> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::validation::Validation;
    ///
    /// let v = Validation::<i32, &str>::valid(42);
    /// assert_eq!(v.into_value(), Ok(42));
    /// ```
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value holding a single message.
    #[inline]
    pub fn invalid(message: M) -> Self {
        Self::Invalid(Messages::new(message))
    }

    /// Creates an invalid value from several messages.
    ///
    /// Returns `None` if `messages` is empty, since an `Invalid` must carry
    /// at least one message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::validation::Validation;
    ///
    /// let v = Validation::<(), &str>::invalid_many(["missing", "malformed"]).unwrap();
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    ///
    /// assert!(Validation::<(), &str>::invalid_many([]).is_none());
    /// ```
    #[inline]
    pub fn invalid_many<I>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = M>,
    {
        Messages::try_from_iter(messages).map(Self::Invalid)
    }

    #[inline]
    pub fn from_messages(messages: Messages<M>) -> Self {
        Self::Invalid(messages)
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the validated value.
    ///
    /// # Errors
    ///
    /// [`StateError::WrongVariant`] when called on `Invalid`.
    #[inline]
    pub fn value(&self) -> Result<&T, StateError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(_) => Err(StateError::wrong_variant(Variant::Valid, Variant::Invalid)),
        }
    }

    /// Borrows the accumulated messages.
    ///
    /// # Errors
    ///
    /// [`StateError::WrongVariant`] when called on `Valid`.
    #[inline]
    pub fn errors(&self) -> Result<&Messages<M>, StateError> {
        match self {
            Self::Invalid(messages) => Ok(messages),
            Self::Valid(_) => Err(StateError::wrong_variant(Variant::Invalid, Variant::Valid)),
        }
    }

    /// Takes the validated value.
    ///
    /// # Errors
    ///
    /// [`StateError::WrongVariant`] when called on `Invalid`.
    #[inline]
    pub fn into_value(self) -> Result<T, StateError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(_) => Err(StateError::wrong_variant(Variant::Valid, Variant::Invalid)),
        }
    }

    /// Takes the accumulated messages.
    ///
    /// # Errors
    ///
    /// [`StateError::WrongVariant`] when called on `Valid`.
    #[inline]
    pub fn into_errors(self) -> Result<Messages<M>, StateError> {
        match self {
            Self::Invalid(messages) => Ok(messages),
            Self::Valid(_) => Err(StateError::wrong_variant(Variant::Invalid, Variant::Valid)),
        }
    }

    /// Maps the valid value; an `Invalid` keeps its messages unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::validation::Validation;
    ///
    /// let v = Validation::<i32, &str>::valid(21).map(|x| x * 2);
    /// assert_eq!(v.into_value(), Ok(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, M>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(messages) => Validation::Invalid(messages),
        }
    }

    /// Chains a dependent validation step, stopping at the first `Invalid`.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, M>
    where
        F: FnOnce(T) -> Validation<U, M>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(messages) => Validation::Invalid(messages),
        }
    }

    /// Pairs two validations, accumulating the messages of both.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::validation::Validation;
    ///
    /// let a = Validation::<i32, &str>::invalid("first");
    /// let b = Validation::<i32, &str>::invalid("second");
    /// assert_eq!(a.zip(b).into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Validation<U, M>) -> Validation<(T, U), M> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.append(e2);
                Validation::Invalid(e1)
            },
        }
    }

    /// Maps each message while preserving the valid branch.
    #[inline]
    pub fn map_messages<N, F>(self, f: F) -> Validation<T, N>
    where
        F: FnMut(M) -> N,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(messages) => Validation::Invalid(messages.map(f)),
        }
    }

    /// Moves onto the failure rail, translating the messages with `mapper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::validation::Validation;
    /// use rop_rail::Outcome;
    ///
    /// let v = Validation::<u8, &str>::invalid_many(["too young", "no email"]).unwrap();
    /// let outcome: Outcome<u8, String> = v.into_outcome(|m| m.to_string());
    /// assert_eq!(outcome, Outcome::failure("too young, no email".to_string()));
    /// ```
    #[inline]
    pub fn into_outcome<E, F>(self, mapper: F) -> Outcome<T, E>
    where
        F: FnOnce(Messages<M>) -> E,
    {
        match self {
            Self::Valid(value) => Outcome::Success(value),
            Self::Invalid(messages) => Outcome::Failure(mapper(messages)),
        }
    }

    /// Accumulates a sequence of validations of the same subject.
    ///
    /// Every message of every `Invalid` entry is collected, flattened in
    /// input order. When no entry is invalid the **first** entry's value is
    /// returned; the values of later entries are dropped.
    ///
    /// # Errors
    ///
    /// [`StateError::EmptyCombine`] when `results` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::validation::Validation;
    ///
    /// let combined = Validation::<&str, &str>::combine([
    ///     Validation::valid("Carlos"),
    ///     Validation::invalid("name is empty"),
    ///     Validation::invalid("age is negative"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(combined.into_errors().unwrap().to_vec(), vec!["name is empty", "age is negative"]);
    /// ```
    pub fn combine<I>(results: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut results = results.into_iter();
        let first = results.next().ok_or(StateError::EmptyCombine)?;
        Ok(Self::combine_with(first, results))
    }

    /// Same accumulation as [`combine`](Self::combine) with the first entry
    /// passed separately, so the input can never be empty.
    pub fn combine_with<I>(first: Self, rest: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        rest.into_iter().fold(first, |combined, next| match (combined, next) {
            (Self::Valid(value), Self::Valid(_)) => Self::Valid(value),
            (Self::Valid(_), Self::Invalid(messages)) => Self::Invalid(messages),
            (Self::Invalid(messages), Self::Valid(_)) => Self::Invalid(messages),
            (Self::Invalid(mut messages), Self::Invalid(more)) => {
                messages.append(more);
                Self::Invalid(messages)
            },
        })
    }
}

impl<T, M> From<Validation<T, M>> for Result<T, Messages<M>> {
    #[inline]
    fn from(validation: Validation<T, M>) -> Self {
        match validation {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(messages) => Err(messages),
        }
    }
}
