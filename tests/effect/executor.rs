use std::future::Future;
use std::pin::pin;
use std::sync::{Arc, Mutex};
use std::task::Context;

use futures_util::future::FusedFuture;
use futures_util::task::noop_waker;
use rop_rail::effect::{
    keys, EffectExecutor, Fault, FaultKind, FnLogger, InlineExecutor, LogContext, Status,
    TaskExecutor, TaskHandle,
};
use rop_rail::Outcome;

#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
}

#[derive(Default, Clone)]
struct Recorder {
    records: Arc<Mutex<Vec<(String, LogContext)>>>,
}

impl Recorder {
    fn logger(&self) -> FnLogger<impl Fn(&str, &LogContext) + Send + 'static> {
        let records = Arc::clone(&self.records);
        FnLogger::new(move |event: &str, context: &LogContext| {
            records.lock().unwrap().push((event.to_string(), context.clone()));
        })
    }

    fn take(&self) -> Vec<(String, LogContext)> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }
}

fn user() -> User {
    User { email: "ana@example.com".to_string() }
}

#[tokio::test]
async fn run_effect_returns_input_and_logs_once() {
    let recorder = Recorder::default();
    let effects = EffectExecutor::new(InlineExecutor);

    let outcome = effects
        .run_effect(user(), |_| Ok::<_, &str>(()), |f| f.to_string(), "send_email", recorder.logger())
        .await;

    assert_eq!(outcome, Outcome::success(user()));

    let records = recorder.take();
    assert_eq!(records.len(), 1);
    let (event, context) = &records[0];
    assert_eq!(event, "send_email");
    assert_eq!(context.status(), Some(Status::Success));
    assert!(context.duration_ms().is_some());
    assert_eq!(context.text(keys::INPUT), Some(r#"User { email: "ana@example.com" }"#));
    assert!(context.get(keys::ERROR).is_none());
}

#[tokio::test]
async fn run_effect_error_is_mapped_and_logged() {
    let recorder = Recorder::default();
    let effects = EffectExecutor::new(InlineExecutor);

    let outcome = effects
        .run_effect(
            user(),
            |_| Err("SMTP error"),
            |fault| format!("EMAIL_SEND_FAILED: {}", fault.message()),
            "send_email",
            recorder.logger(),
        )
        .await;

    assert_eq!(outcome, Outcome::failure("EMAIL_SEND_FAILED: SMTP error".to_string()));

    let records = recorder.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1.status(), Some(Status::Failure));
    assert_eq!(records[0].1.text(keys::ERROR), Some("SMTP error"));
}

#[tokio::test]
async fn run_effect_panic_becomes_failure() {
    let recorder = Recorder::default();
    let effects = EffectExecutor::new(InlineExecutor);

    let outcome = effects
        .run_effect(
            user(),
            |_| -> Result<(), &'static str> { panic!("connection reset") },
            |fault| (fault.kind(), fault.message().to_string()),
            "send_email",
            recorder.logger(),
        )
        .await;

    assert_eq!(outcome, Outcome::failure((FaultKind::Panic, "connection reset".to_string())));
    assert_eq!(recorder.take()[0].1.status(), Some(Status::Failure));
}

#[tokio::test]
async fn run_transform_logs_input_and_output() {
    let recorder = Recorder::default();
    let effects = EffectExecutor::new(InlineExecutor);

    let outcome = effects
        .run_transform(
            "21".to_string(),
            |raw| raw.parse::<u32>().map(|n| n * 2),
            |fault| fault.to_string(),
            "parse",
            recorder.logger(),
        )
        .await;

    assert_eq!(outcome, Outcome::success(42));

    let records = recorder.take();
    assert_eq!(records.len(), 1);
    let context = &records[0].1;
    assert_eq!(context.text(keys::INPUT), Some(r#""21""#));
    assert_eq!(context.text(keys::OUTPUT), Some("42"));
    assert_eq!(context.status(), Some(Status::Success));
}

#[tokio::test]
async fn run_transform_error_source_is_kept() {
    let effects = EffectExecutor::new(InlineExecutor);

    let outcome = effects
        .run_transform(
            "nope".to_string(),
            |raw| raw.parse::<u32>(),
            |fault| fault.into_source().map(|source| source.is::<std::num::ParseIntError>()),
            "parse",
            rop_rail::effect::NoopLogger,
        )
        .await;

    assert_eq!(outcome, Outcome::failure(Some(true)));
}

#[tokio::test]
async fn run_outcome_transform_passes_domain_failure_through() {
    let recorder = Recorder::default();
    let effects = EffectExecutor::new(InlineExecutor);
    let mapper_called = Arc::new(Mutex::new(false));
    let flag = Arc::clone(&mapper_called);

    let outcome = effects
        .run_outcome_transform(
            17_u8,
            |age| {
                if age >= 18 {
                    Outcome::success(age)
                } else {
                    Outcome::failure("underage".to_string())
                }
            },
            move |fault| {
                *flag.lock().unwrap() = true;
                fault.to_string()
            },
            "check_age",
            recorder.logger(),
        )
        .await;

    assert_eq!(outcome, Outcome::failure("underage".to_string()));
    assert!(!*mapper_called.lock().unwrap());

    let records = recorder.take();
    assert_eq!(records[0].1.status(), Some(Status::Failure));
    assert_eq!(records[0].1.text(keys::ERROR), Some(r#""underage""#));
}

#[tokio::test]
async fn run_task_logs_without_input() {
    let recorder = Recorder::default();
    let effects = EffectExecutor::new(InlineExecutor);

    let outcome = effects
        .run_task(
            || Outcome::<u64, String>::success(7),
            |fault| fault.to_string(),
            "next_id",
            recorder.logger(),
        )
        .await;

    assert_eq!(outcome, Outcome::success(7));

    let records = recorder.take();
    assert_eq!(records.len(), 1);
    assert!(records[0].1.get(keys::INPUT).is_none());
    assert_eq!(records[0].1.text(keys::OUTPUT), Some("7"));
}

#[tokio::test]
async fn effect_runs_in_pipeline_with_flat_map_async() {
    let recorder = Recorder::default();
    let effects = EffectExecutor::new(InlineExecutor);

    let outcome = rop_rail::Pipeline::<User, String>::start(user())
        .flat_map_async(|u| {
            effects.run_effect(u, |_| Ok::<_, &str>(()), |f| f.to_string(), "save", recorder.logger())
        })
        .map(|u| u.email)
        .await;

    assert_eq!(outcome, Outcome::success("ana@example.com".to_string()));
    assert_eq!(recorder.take().len(), 1);
}

/// Drops every job without running it, like a runtime that is shutting down.
struct DroppingExecutor;

impl TaskExecutor for DroppingExecutor {
    fn spawn<T, F>(&self, job: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        drop(job);
        TaskHandle::ready(Err(Fault::lost("runtime shut down")))
    }
}

#[tokio::test]
async fn dropped_job_is_mapped_and_logged_once() {
    let recorder = Recorder::default();
    let effects = EffectExecutor::new(DroppingExecutor);

    let outcome = effects
        .run_effect(
            user(),
            |_| Ok::<_, &str>(()),
            |fault| (fault.kind(), fault.message().to_string()),
            "send_email",
            recorder.logger(),
        )
        .await;

    assert_eq!(outcome, Outcome::failure((FaultKind::Lost, "runtime shut down".to_string())));

    let records = recorder.take();
    assert_eq!(records.len(), 1);
    let (event, context) = &records[0];
    assert_eq!(event, "send_email");
    assert_eq!(context.status(), Some(Status::Failure));
    assert_eq!(context.duration_ms(), Some(0));
    assert_eq!(context.text(keys::ERROR), Some("job dropped before it ran"));
    assert!(context.get(keys::INPUT).is_none());
}

#[test]
fn finished_effect_future_stays_pending() {
    let effects = EffectExecutor::new(InlineExecutor);
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    let mut future = pin!(effects.run_effect(
        1_u8,
        |_| Err("disk full"),
        |fault| fault.to_string(),
        "save",
        rop_rail::effect::NoopLogger,
    ));

    assert!(!future.is_terminated());
    assert_eq!(future.as_mut().poll(&mut cx), std::task::Poll::Ready(Outcome::failure("disk full".to_string())));
    assert!(future.is_terminated());
    assert!(future.as_mut().poll(&mut cx).is_pending());
}
