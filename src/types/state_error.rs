//! Invariant violations raised by the checked accessors of [`Outcome`] and
//! [`Validation`].
//!
//! These are programming errors, not domain failures: they never travel on
//! the failure rail of a pipeline and are reported through a plain
//! `core::result::Result` instead.
//!
//! [`Outcome`]: crate::types::Outcome
//! [`Validation`]: crate::validation::Validation

use core::fmt;

/// Names one side of a two-variant union, used in [`StateError::WrongVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Success,
    Failure,
    Valid,
    Invalid,
}

impl Variant {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Success => "Success",
            Variant::Failure => "Failure",
            Variant::Valid => "Valid",
            Variant::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a union is read on the side it does not hold, or when
/// an accumulation receives nothing to accumulate.
///
/// # Examples
///
/// ```
/// use rop_rail::{Outcome, StateError, Variant};
///
/// let outcome: Outcome<i32, &str> = Outcome::failure("boom");
/// assert_eq!(
///     outcome.value(),
///     Err(StateError::WrongVariant { expected: Variant::Success, found: Variant::Failure })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateError {
    /// The accessor expected `expected` but the value holds `found`.
    WrongVariant { expected: Variant, found: Variant },
    /// `Validation::combine` was given an empty sequence.
    EmptyCombine,
}

impl StateError {
    #[inline]
    pub(crate) const fn wrong_variant(expected: Variant, found: Variant) -> Self {
        Self::WrongVariant { expected, found }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::WrongVariant { expected, found } => {
                write!(f, "wrong variant accessed: expected {expected}, found {found}")
            },
            StateError::EmptyCombine => f.write_str("cannot combine an empty set of validations"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StateError {}
