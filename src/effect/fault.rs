//! Faults captured at the effect boundary.
//!
//! A [`Fault`] is whatever made an effect stop abnormally: an error it
//! returned, a panic, or the executor losing the job. Faults never travel on
//! a pipeline; the [`EffectExecutor`](crate::effect::EffectExecutor) hands
//! each one to a caller-supplied mapper that turns it into the domain error.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Boxed error accepted from effect bodies.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// What kind of abnormal stop produced a [`Fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The effect returned an error.
    Error,
    /// The effect panicked.
    Panic,
    /// The executor dropped or cancelled the job before it produced a value.
    Lost,
}

/// A captured fault from an effect, transform or submitted task.
///
/// # Examples
///
/// ```
/// use rop_rail::effect::{Fault, FaultKind};
///
/// let fault = Fault::from_error("SMTP error");
/// assert_eq!(fault.kind(), FaultKind::Error);
/// assert_eq!(fault.message(), "SMTP error");
/// ```
#[derive(Debug)]
pub struct Fault {
    kind: FaultKind,
    message: String,
    source: Option<BoxError>,
}

impl Fault {
    /// Wraps an error returned by an effect.
    pub fn from_error(error: impl Into<BoxError>) -> Self {
        let source = error.into();
        Self { kind: FaultKind::Error, message: source.to_string(), source: Some(source) }
    }

    /// Wraps a panic payload as produced by `catch_unwind` or a join error.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_string(),
                None => "effect panicked with a non-string payload".to_string(),
            },
        };
        Self { kind: FaultKind::Panic, message, source: None }
    }

    /// A job the executor never completed.
    pub fn lost(message: impl Into<String>) -> Self {
        Self { kind: FaultKind::Lost, message: message.into(), source: None }
    }

    #[inline]
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn is_panic(&self) -> bool {
        self.kind == FaultKind::Panic
    }

    /// Takes the original error, if the fault came from one.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

/// Runs `body`, turning a panic into [`FaultKind::Panic`].
pub(crate) fn catch<R>(body: impl FnOnce() -> Result<R, Fault>) -> Result<R, Fault> {
    panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| Err(Fault::from_panic(payload)))
}
