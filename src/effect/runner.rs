use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use std::time::{Duration, Instant};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::effect::executor::{TaskExecutor, TaskHandle};
use crate::effect::fault::{self, BoxError, Fault};
use crate::effect::logger::{keys, LogContext, Status, StructuredLogger};
use crate::types::Outcome;

/// Runs side-effects and fallible transforms at the edge of a pipeline.
///
/// Every call submits one job to the configured [`TaskExecutor`]. Inside the
/// job the body is timed, any error or panic is captured as a [`Fault`], and
/// exactly one record is sent to the supplied [`StructuredLogger`] before the
/// job completes. The returned [`EffectFuture`] then resolves to an
/// [`Outcome`]: faults are handed to the caller's `error_mapper` and come back
/// as `Failure`, so nothing escapes the boundary as a panic or a raw error.
///
/// Each record carries `status` and `duration_ms`, plus `input` for effects
/// and transforms, `output` on a successful transform and `error` on failure.
/// A job the executor drops without running is logged as a failure with
/// `duration_ms = 0` and no `input`.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "async-tokio")]
/// # #[tokio::main]
/// # async fn main() {
/// use rop_rail::async_ext::TokioExecutor;
/// use rop_rail::effect::{EffectExecutor, NoopLogger};
/// use rop_rail::Outcome;
///
/// let effects = EffectExecutor::new(TokioExecutor::current());
///
/// let saved = effects
///     .run_effect(
///         "alice@example.com".to_string(),
///         |email| if email.contains('@') { Ok(()) } else { Err("bad address") },
///         |fault| format!("send failed: {fault}"),
///         "send_email",
///         NoopLogger,
///     )
///     .await;
///
/// assert_eq!(saved, Outcome::success("alice@example.com".to_string()));
/// # }
/// # #[cfg(not(feature = "async-tokio"))]
/// # fn main() {}
/// ```
#[derive(Debug, Clone, Default)]
pub struct EffectExecutor<X> {
    executor: X,
}

impl<X: TaskExecutor> EffectExecutor<X> {
    #[inline]
    pub fn new(executor: X) -> Self {
        Self { executor }
    }

    #[inline]
    pub fn executor(&self) -> &X {
        &self.executor
    }

    /// Runs `effect` for its side-effect and hands `input` back unchanged.
    ///
    /// Resolves to `Success(input)` when the effect returns `Ok(())`. An
    /// error or panic resolves to `Failure(error_mapper(fault))`.
    pub fn run_effect<T, E, F, R, M, L>(
        &self,
        input: T,
        effect: F,
        error_mapper: M,
        event: &str,
        logger: L,
    ) -> EffectFuture<T, E, M>
    where
        T: Debug + Send + 'static,
        E: Send + 'static,
        F: FnOnce(&T) -> Result<(), R> + Send + 'static,
        R: Into<BoxError>,
        M: FnOnce(Fault) -> E,
        L: StructuredLogger + Send + 'static,
    {
        let log = JobLog::new(event, logger);
        let job = move || {
            let shown = format!("{input:?}");
            log.observe(Some(shown), Detail::silent, move || {
                effect(&input).map_err(Fault::from_error)?;
                Ok(Outcome::Success(input))
            })
        };
        EffectFuture::new(self.executor.spawn(job), error_mapper)
    }

    /// Runs a fallible transform from `In` to `Out`.
    ///
    /// The input is rendered for the log record before `transform` takes it.
    pub fn run_transform<In, Out, E, F, R, M, L>(
        &self,
        input: In,
        transform: F,
        error_mapper: M,
        event: &str,
        logger: L,
    ) -> EffectFuture<Out, E, M>
    where
        In: Debug + Send + 'static,
        Out: Debug + Send + 'static,
        E: Send + 'static,
        F: FnOnce(In) -> Result<Out, R> + Send + 'static,
        R: Into<BoxError>,
        M: FnOnce(Fault) -> E,
        L: StructuredLogger + Send + 'static,
    {
        let log = JobLog::new(event, logger);
        let job = move || {
            let shown = format!("{input:?}");
            log.observe(Some(shown), Detail::output, move || {
                transform(input).map(Outcome::Success).map_err(Fault::from_error)
            })
        };
        EffectFuture::new(self.executor.spawn(job), error_mapper)
    }

    /// Runs a transform that already speaks [`Outcome`].
    ///
    /// A domain `Failure` is passed through as is and logged with
    /// `status = failure`; only errors and panics go through `error_mapper`.
    pub fn run_outcome_transform<In, Out, E, F, M, L>(
        &self,
        input: In,
        transform: F,
        error_mapper: M,
        event: &str,
        logger: L,
    ) -> EffectFuture<Out, E, M>
    where
        In: Debug + Send + 'static,
        Out: Debug + Send + 'static,
        E: Debug + Send + 'static,
        F: FnOnce(In) -> Outcome<Out, E> + Send + 'static,
        M: FnOnce(Fault) -> E,
        L: StructuredLogger + Send + 'static,
    {
        let log = JobLog::new(event, logger);
        let job = move || {
            let shown = format!("{input:?}");
            log.observe(Some(shown), Detail::output_or_error, move || {
                Ok(transform(input))
            })
        };
        EffectFuture::new(self.executor.spawn(job), error_mapper)
    }

    /// Runs a task with no input, such as a repository call.
    ///
    /// Logged like [`run_outcome_transform`](Self::run_outcome_transform)
    /// without the `input` field.
    pub fn run_task<T, E, F, M, L>(
        &self,
        task: F,
        error_mapper: M,
        event: &str,
        logger: L,
    ) -> EffectFuture<T, E, M>
    where
        T: Debug + Send + 'static,
        E: Debug + Send + 'static,
        F: FnOnce() -> Outcome<T, E> + Send + 'static,
        M: FnOnce(Fault) -> E,
        L: StructuredLogger + Send + 'static,
    {
        let log = JobLog::new(event, logger);
        let job = move || log.observe(None, Detail::output_or_error, move || Ok(task()));
        EffectFuture::new(self.executor.spawn(job), error_mapper)
    }
}

/// Extra field added to a record for the finished outcome.
enum Detail {
    None,
    Output(String),
    Error(String),
}

impl Detail {
    fn silent<T, E>(_: &Outcome<T, E>) -> Self {
        Detail::None
    }

    fn output<T: Debug, E>(outcome: &Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Detail::Output(format!("{value:?}")),
            Outcome::Failure(_) => Detail::None,
        }
    }

    fn output_or_error<T: Debug, E: Debug>(outcome: &Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Detail::Output(format!("{value:?}")),
            Outcome::Failure(error) => Detail::Error(format!("{error:?}")),
        }
    }
}

/// Error text logged for a job dropped by its executor before it ran.
const DROPPED: &str = "job dropped before it ran";

/// Record sink for one submitted job.
///
/// Consumed by [`observe`](JobLog::observe) when the job runs. If the
/// executor drops the job instead, a failure record is logged on drop.
struct JobLog<L: StructuredLogger> {
    event: String,
    logger: L,
    pending: bool,
}

impl<L: StructuredLogger> JobLog<L> {
    fn new(event: &str, logger: L) -> Self {
        Self { event: event.to_owned(), logger, pending: true }
    }

    /// Times `body`, captures panics, and logs exactly one record.
    fn observe<T, E, B>(
        mut self,
        input: Option<String>,
        describe: fn(&Outcome<T, E>) -> Detail,
        body: B,
    ) -> Result<Outcome<T, E>, Fault>
    where
        B: FnOnce() -> Result<Outcome<T, E>, Fault>,
    {
        self.pending = false;

        let started = Instant::now();
        let result = fault::catch(body);
        let elapsed = started.elapsed();

        let context = match &result {
            Ok(outcome) => {
                let status = if outcome.is_success() { Status::Success } else { Status::Failure };
                let context = LogContext::record(status, elapsed, input);
                match describe(outcome) {
                    Detail::None => context,
                    Detail::Output(output) => context.with(keys::OUTPUT, output),
                    Detail::Error(error) => context.with(keys::ERROR, error),
                }
            },
            Err(fault) => LogContext::record(Status::Failure, elapsed, input)
                .with(keys::ERROR, fault.message()),
        };
        self.logger.log(&self.event, &context);
        result
    }
}

impl<L: StructuredLogger> Drop for JobLog<L> {
    fn drop(&mut self) {
        if self.pending {
            let context = LogContext::record(Status::Failure, Duration::ZERO, None)
                .with(keys::ERROR, DROPPED);
            self.logger.log(&self.event, &context);
        }
    }
}

pin_project! {
    /// Future returned by the [`EffectExecutor`] operations.
    ///
    /// Resolves to an [`Outcome`] once the submitted job finishes. If the
    /// job faulted, or the executor lost it, `error_mapper` is applied to the
    /// [`Fault`] on the polling side.
    ///
    /// Dropping the future does not cancel a job that is already running.
    /// Once it has resolved, further polls return `Pending`.
    #[must_use = "futures do nothing unless polled"]
    pub struct EffectFuture<T, E, M> {
        #[pin]
        handle: TaskHandle<Result<Outcome<T, E>, Fault>>,
        error_mapper: Option<M>,
    }
}

impl<T, E, M> EffectFuture<T, E, M> {
    #[inline]
    fn new(handle: TaskHandle<Result<Outcome<T, E>, Fault>>, error_mapper: M) -> Self {
        Self { handle, error_mapper: Some(error_mapper) }
    }
}

impl<T, E, M> Future for EffectFuture<T, E, M>
where
    M: FnOnce(Fault) -> E,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        // The mapper is taken on completion; a finished future stays pending.
        if this.error_mapper.is_none() {
            return Poll::Pending;
        }
        let joined = ready!(this.handle.poll(cx));
        let Some(error_mapper) = this.error_mapper.take() else {
            return Poll::Pending;
        };

        Poll::Ready(match joined.and_then(|ran| ran) {
            Ok(outcome) => outcome,
            Err(fault) => Outcome::Failure(error_mapper(fault)),
        })
    }
}

impl<T, E, M> FusedFuture for EffectFuture<T, E, M>
where
    M: FnOnce(Fault) -> E,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.error_mapper.is_none()
    }
}
