//! Tests for run_in_parallel and friends.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rop_rail::prelude_async::*;

type Task = Box<dyn FnOnce(String) -> BoxFut + Send>;
type BoxFut = rop_rail::async_ext::BoxFuture<'static, Outcome<String, String>>;

fn task<F, Fut>(f: F) -> Task
where
    F: FnOnce(String) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Outcome<String, String>> + Send + 'static,
{
    Box::new(move |input: String| -> BoxFut { Box::pin(f(input)) })
}

#[tokio::test]
async fn results_follow_submission_order() {
    let outcome = run_in_parallel(
        "T".to_string(),
        vec![
            task(|input| async move {
                tokio::time::sleep(Duration::from_millis(30)).await;
                Outcome::success(format!("{input}A"))
            }),
            task(|input| async move { Outcome::success(format!("{input}B")) }),
        ],
        |errors| errors.join(", "),
    )
    .await;

    assert_eq!(outcome, Outcome::success(vec!["TA".to_string(), "TB".to_string()]));
}

#[tokio::test]
async fn failures_are_combined_in_order_after_all_tasks_ran() {
    let ran = Arc::new(AtomicUsize::new(0));
    let r1 = Arc::clone(&ran);
    let r2 = Arc::clone(&ran);
    let r3 = Arc::clone(&ran);

    let outcome = run_in_parallel(
        "input".to_string(),
        vec![
            task(move |_| async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                r1.fetch_add(1, Ordering::SeqCst);
                Outcome::failure("E1".to_string())
            }),
            task(move |input| async move {
                r2.fetch_add(1, Ordering::SeqCst);
                Outcome::success(input)
            }),
            task(move |_| async move {
                r3.fetch_add(1, Ordering::SeqCst);
                Outcome::failure("E2".to_string())
            }),
        ],
        |errors| errors.join(", "),
    )
    .await;

    assert_eq!(outcome, Outcome::failure("E1, E2".to_string()));
    assert_eq!(ran.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn combiner_only_called_on_failure() {
    let combined = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&combined);

    let outcome = run_in_parallel(
        "x".to_string(),
        vec![task(|input| async move { Outcome::success(input) })],
        move |errors: Vec<String>| {
            counter.fetch_add(1, Ordering::SeqCst);
            errors.join(", ")
        },
    )
    .await;

    assert!(outcome.is_success());
    assert_eq!(combined.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_task_list_succeeds_with_no_values() {
    let outcome = run_in_parallel("x".to_string(), Vec::<Task>::new(), |errors| errors.join(", ")).await;
    assert_eq!(outcome, Outcome::success(Vec::new()));
}

#[tokio::test]
async fn tasks_make_progress_concurrently() {
    let started = tokio::time::Instant::now();

    let outcome = run_in_parallel(
        (),
        (0..4_u64).map(|i| {
            move |_: ()| async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Outcome::<u64, String>::success(i)
            }
        }),
        |errors| errors.join(", "),
    )
    .await;

    assert_eq!(outcome, Outcome::success(vec![0, 1, 2, 3]));
    assert!(started.elapsed() < Duration::from_millis(190));
}

#[tokio::test]
async fn erased_tasks_keep_their_types() {
    let outcome = run_in_parallel_erased(
        42_u32,
        vec![
            erase(|id: u32| async move { Outcome::<_, String>::success(format!("user-{id}")) }),
            erase(|id: u32| async move { Outcome::<_, String>::success(id as u64 * 2) }),
            erase(|_: u32| async move { Outcome::<_, String>::success(true) }),
        ],
        |errors| errors.join(", "),
    )
    .await;

    let values = outcome.into_value().unwrap();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0].downcast_ref::<String>().unwrap(), "user-42");
    assert_eq!(values[1].downcast_ref::<u64>(), Some(&84));
    assert_eq!(values[2].downcast_ref::<bool>(), Some(&true));
}

#[tokio::test]
async fn erased_failures_are_combined() {
    let outcome = run_in_parallel_erased(
        (),
        vec![
            erase(|_: ()| async { Outcome::<u8, String>::failure("E1".to_string()) }),
            erase(|_: ()| async { Outcome::<String, String>::failure("E2".to_string()) }),
        ],
        |errors| errors.join(", "),
    )
    .await;

    assert_eq!(outcome.into_error(), Ok("E1, E2".to_string()));
}

/// Counts every poll of `future`.
fn counted<F>(polls: Arc<AtomicUsize>, future: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    let mut future = Box::pin(future);
    std::future::poll_fn(move |cx| {
        polls.fetch_add(1, Ordering::Relaxed);
        future.as_mut().poll(cx)
    })
}

#[tokio::test]
async fn waiting_tasks_are_not_repolled_on_every_wake() {
    const TASKS: u64 = 200;
    let polls = Arc::new(AtomicUsize::new(0));

    let tasks = (0..TASKS).map(|i| {
        let polls = Arc::clone(&polls);
        move |_: ()| {
            counted(polls, async move {
                tokio::time::sleep(Duration::from_millis(i)).await;
                Outcome::<u64, String>::success(i)
            })
        }
    });
    let outcome = run_in_parallel((), tasks, |errors| errors.join(", ")).await;

    assert_eq!(outcome.into_value().unwrap(), (0..TASKS).collect::<Vec<_>>());
    let polls = polls.load(Ordering::Relaxed);
    assert!(polls < 4 * TASKS as usize, "{polls} polls for {TASKS} tasks");
}
