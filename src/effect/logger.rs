//! Structured log records emitted once per effect call.
//!
//! The executor builds a [`LogContext`] with a fixed set of keys (see
//! [`keys`]) and hands it to a [`StructuredLogger`] together with the event
//! name. Sinks decide what to do with it; [`NoopLogger`] drops it,
//! [`FnLogger`] forwards it to a closure, and the `tracing` feature adds
//! [`TracingLogger`](crate::async_ext::TracingLogger).

use core::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Keys recognized in a [`LogContext`].
pub mod keys {
    pub const STATUS: &str = "status";
    pub const DURATION_MS: &str = "duration_ms";
    pub const INPUT: &str = "input";
    pub const OUTPUT: &str = "output";
    pub const ERROR: &str = "error";
}

/// Result of the logged call.
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field value.
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogValue {
    Text(String),
    Integer(u64),
}

impl LogValue {
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LogValue::Text(text) => Some(text),
            LogValue::Integer(_) => None,
        }
    }

    #[inline]
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            LogValue::Integer(n) => Some(*n),
            LogValue::Text(_) => None,
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Text(text) => f.write_str(text),
            LogValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for LogValue {
    fn from(text: String) -> Self {
        LogValue::Text(text)
    }
}

impl From<&str> for LogValue {
    fn from(text: &str) -> Self {
        LogValue::Text(text.to_string())
    }
}

impl From<u64> for LogValue {
    fn from(n: u64) -> Self {
        LogValue::Integer(n)
    }
}

/// Ordered key/value fields of one log record.
///
/// Inserting an existing key replaces its value in place.
///
/// # Examples
///
/// ```
/// use rop_rail::effect::{keys, LogContext, Status};
///
/// let mut context = LogContext::new();
/// context.insert(keys::STATUS, Status::Success.as_str());
/// context.insert(keys::DURATION_MS, 12_u64);
///
/// assert_eq!(context.status(), Some(Status::Success));
/// assert_eq!(context.duration_ms(), Some(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    fields: Vec<(&'static str, LogValue)>,
}

impl LogContext {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a record with `status`, `duration_ms` and, when given, `input`.
    pub(crate) fn record(status: Status, duration: Duration, input: Option<String>) -> Self {
        let mut context = Self { fields: Vec::with_capacity(4) };
        context.insert(keys::STATUS, status.as_str());
        context.insert(keys::DURATION_MS, u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        if let Some(input) = input {
            context.insert(keys::INPUT, input);
        }
        context
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<LogValue>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<LogValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&LogValue> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(LogValue::as_text)
    }

    pub fn status(&self) -> Option<Status> {
        match self.text(keys::STATUS)? {
            "success" => Some(Status::Success),
            "failure" => Some(Status::Failure),
            _ => None,
        }
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.get(keys::DURATION_MS).and_then(LogValue::as_integer)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &LogValue)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(feature = "serde")]
impl Serialize for LogContext {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Sink for structured log records.
///
/// Implementations must tolerate concurrent calls; the executor logs from
/// whichever thread ran the effect.
pub trait StructuredLogger {
    fn log(&self, event: &str, context: &LogContext);
}

impl<L: StructuredLogger + ?Sized> StructuredLogger for &L {
    #[inline]
    fn log(&self, event: &str, context: &LogContext) {
        (**self).log(event, context)
    }
}

impl<L: StructuredLogger + ?Sized> StructuredLogger for Arc<L> {
    #[inline]
    fn log(&self, event: &str, context: &LogContext) {
        (**self).log(event, context)
    }
}

impl<L: StructuredLogger + ?Sized> StructuredLogger for Box<L> {
    #[inline]
    fn log(&self, event: &str, context: &LogContext) {
        (**self).log(event, context)
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl StructuredLogger for NoopLogger {
    #[inline]
    fn log(&self, _event: &str, _context: &LogContext) {}
}

/// Forwards every record to a closure.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use rop_rail::effect::{FnLogger, LogContext, StructuredLogger};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let logger = FnLogger::new(move |event: &str, _: &LogContext| {
///     sink.lock().unwrap().push(event.to_string());
/// });
///
/// logger.log("send_email", &LogContext::new());
/// assert_eq!(*seen.lock().unwrap(), vec!["send_email".to_string()]);
/// ```
#[derive(Clone)]
pub struct FnLogger<F> {
    f: F,
}

impl<F> FnLogger<F>
where
    F: Fn(&str, &LogContext),
{
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> StructuredLogger for FnLogger<F>
where
    F: Fn(&str, &LogContext),
{
    #[inline]
    fn log(&self, event: &str, context: &LogContext) {
        (self.f)(event, context)
    }
}

impl<F> fmt::Debug for FnLogger<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLogger").finish_non_exhaustive()
    }
}
