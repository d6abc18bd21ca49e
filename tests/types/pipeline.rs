use std::cell::Cell;

use rop_rail::validation::Validation;
use rop_rail::{Outcome, Pipeline};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    total: u32,
}

#[test]
fn success_path_runs_every_step_in_order() {
    let trail = std::cell::RefCell::new(Vec::new());

    let outcome = Pipeline::<Order, String>::start(Order { id: 1, total: 40 })
        .validate(
            |order| {
                trail.borrow_mut().push("validate");
                Validation::valid(order)
            },
            |message: String| message,
        )
        .map(|order| {
            trail.borrow_mut().push("map");
            order.total
        })
        .peek(|_| trail.borrow_mut().push("peek"))
        .flat_map(|total| {
            trail.borrow_mut().push("flat_map");
            Outcome::success(total * 2)
        })
        .build();

    assert_eq!(outcome, Outcome::success(80));
    assert_eq!(*trail.borrow(), vec!["validate", "map", "peek", "flat_map"]);
}

#[test]
fn failure_short_circuits_later_steps() {
    let calls = Cell::new(0);

    let outcome = Pipeline::<i32, String>::start(1)
        .flat_map(|_| Outcome::failure("stop".to_string()))
        .map(|x: i32| {
            calls.set(calls.get() + 1);
            x
        })
        .validate(
            |x| {
                calls.set(calls.get() + 1);
                Validation::<i32, String>::valid(x)
            },
            |m| m,
        )
        .peek(|_| calls.set(calls.get() + 1))
        .filter(
            |_| {
                calls.set(calls.get() + 1);
                true
            },
            "unused".to_string(),
        )
        .build();

    assert_eq!(outcome, Outcome::failure("stop".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn validate_maps_first_message_only() {
    let outcome = Pipeline::<&str, String>::start("")
        .validate(
            |email| {
                Validation::<&str, &str>::invalid_many(["email is empty", "email is invalid"])
                    .unwrap_or(Validation::valid(email))
            },
            |message| format!("validation: {message}"),
        )
        .build();

    assert_eq!(outcome, Outcome::failure("validation: email is empty".to_string()));
}

#[test]
fn recover_restores_success() {
    let outcome = Pipeline::<String, &str>::failure("ERROR")
        .recover(|_| "Recovered".to_string())
        .build();

    assert_eq!(outcome.into_value(), Ok("Recovered".to_string()));
}

#[test]
fn recover_is_skipped_on_success() {
    let outcome = Pipeline::<i32, &str>::start(5).recover(|_| 0).build();
    assert_eq!(outcome, Outcome::success(5));
}

#[test]
fn filter_rejects_with_supplied_error() {
    let rejected = Pipeline::<u8, &str>::start(16).filter(|age| *age >= 18, "underage").build();
    assert_eq!(rejected, Outcome::failure("underage"));

    let accepted = Pipeline::<u8, &str>::start(30).filter(|age| *age >= 18, "underage").build();
    assert_eq!(accepted, Outcome::success(30));
}

#[test]
fn on_success_and_on_failure_observe_only_their_side() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);

    let ok = Pipeline::<i32, &str>::start(1)
        .on_success(|_| successes.set(successes.get() + 1))
        .on_failure(|_| failures.set(failures.get() + 1))
        .build();

    let failed = Pipeline::<i32, &str>::failure("x")
        .on_success(|_| successes.set(successes.get() + 1))
        .on_failure(|_| failures.set(failures.get() + 1))
        .build();

    assert_eq!(ok, Outcome::success(1));
    assert_eq!(failed, Outcome::failure("x"));
    assert_eq!((successes.get(), failures.get()), (1, 1));
}

#[test]
fn fold_and_map_failure() {
    let text = Pipeline::<u32, &str>::failure("timeout")
        .map_failure(|e| format!("upstream: {e}"))
        .fold(|e| e, |v| v.to_string());

    assert_eq!(text, "upstream: timeout");
}

#[test]
fn from_outcome_and_from_impl_agree() {
    let outcome: Outcome<i32, &str> = Outcome::failure("no");
    assert_eq!(Pipeline::from_outcome(outcome), Pipeline::from(outcome));
    assert!(Pipeline::from(outcome).is_failure());
}

#[cfg(feature = "async")]
#[tokio::test]
async fn flat_map_async_continues_as_async_pipeline() {
    let outcome = Pipeline::<u32, String>::start(2)
        .map(|n| n + 1)
        .flat_map_async(|n| async move { Outcome::success(n * 10) })
        .map(|n| n + 1)
        .await;

    assert_eq!(outcome, Outcome::success(31));
}

#[cfg(feature = "async")]
#[tokio::test]
async fn into_async_keeps_failure() {
    let outcome = Pipeline::<u32, &str>::failure("nope").into_async().map(|n| n + 1).await;
    assert_eq!(outcome, Outcome::failure("nope"));
}
