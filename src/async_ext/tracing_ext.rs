//! Tracing integration.
//!
//! [`TracingLogger`] turns effect log records into `tracing` events, and the
//! span extensions tie pipeline outcomes to the span they ran in.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! rop-rail = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::effect::{keys, LogContext, Status, StructuredLogger};
use crate::types::Outcome;

/// [`StructuredLogger`] that emits one `tracing` event per record.
///
/// Successful calls are logged at `INFO`, failed ones at `WARN`, under the
/// `rop_rail::effect` target with the fields `event`, `status`,
/// `duration_ms`, `input`, `output` and `error`. Absent fields are empty.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "async-tokio")]
/// # #[tokio::main]
/// # async fn main() {
/// use rop_rail::async_ext::{TokioExecutor, TracingLogger};
/// use rop_rail::effect::EffectExecutor;
///
/// let effects = EffectExecutor::new(TokioExecutor::current());
/// let _ = effects
///     .run_effect(1_u8, |_| Ok::<_, &str>(()), |f| f.to_string(), "ping", TracingLogger)
///     .await;
/// # }
/// # #[cfg(not(feature = "async-tokio"))]
/// # fn main() {}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl StructuredLogger for TracingLogger {
    fn log(&self, event: &str, context: &LogContext) {
        let duration_ms = context.duration_ms().unwrap_or_default();
        let input = context.text(keys::INPUT).unwrap_or_default();
        let output = context.text(keys::OUTPUT).unwrap_or_default();
        let error = context.text(keys::ERROR).unwrap_or_default();

        match context.status() {
            Some(Status::Failure) => tracing::warn!(
                target: "rop_rail::effect",
                event,
                status = Status::Failure.as_str(),
                duration_ms,
                input,
                error,
                "effect failed"
            ),
            _ => tracing::info!(
                target: "rop_rail::effect",
                event,
                status = Status::Success.as_str(),
                duration_ms,
                input,
                output,
                "effect completed"
            ),
        }
    }
}

/// Records an [`Outcome`] on a span.
pub trait OutcomeSpanExt: Sized {
    /// Sets the span's `status` field and, on failure, emits a `WARN` event
    /// inside it carrying the error.
    ///
    /// The span must declare `status` (for example
    /// `status = tracing::field::Empty`) for the field to be kept.
    fn record_in(self, span: &Span) -> Self;
}

impl<T, E: Debug> OutcomeSpanExt for Outcome<T, E> {
    fn record_in(self, span: &Span) -> Self {
        match &self {
            Outcome::Success(_) => {
                span.record("status", Status::Success.as_str());
            },
            Outcome::Failure(error) => {
                span.record("status", Status::Failure.as_str());
                tracing::warn!(parent: span, error = ?error, "pipeline failed");
            },
        }
        self
    }
}

/// Runs an outcome-returning future inside a span.
///
/// # Examples
///
/// ```
/// use rop_rail::async_ext::FutureOutcomeSpanExt;
/// use rop_rail::Outcome;
/// use tracing::info_span;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let span = info_span!("register", status = tracing::field::Empty);
/// let outcome = async { Outcome::<u8, &str>::failure("underage") }.in_span(span).await;
/// assert!(outcome.is_failure());
/// # });
/// ```
pub trait FutureOutcomeSpanExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Enters `span` on every poll and records the outcome on it.
    fn in_span(self, span: Span) -> OutcomeSpanFuture<Self> {
        OutcomeSpanFuture { inner: self, span }
    }

    /// Same as [`in_span`](Self::in_span) with the caller's current span.
    fn in_current_span(self) -> OutcomeSpanFuture<Self> {
        self.in_span(Span::current())
    }
}

impl<F, T, E> FutureOutcomeSpanExt<T, E> for F where F: Future<Output = Outcome<T, E>> {}

pin_project! {
    /// Created by [`FutureOutcomeSpanExt::in_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeSpanFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T, E> Future for OutcomeSpanFuture<F>
where
    F: Future<Output = Outcome<T, E>>,
    E: Debug,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let span: &Span = this.span;
        let _entered = span.enter();

        this.inner.poll(cx).map(|outcome| outcome.record_in(span))
    }
}
