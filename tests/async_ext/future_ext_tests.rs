//! Tests for the future extension traits.

use rop_rail::prelude_async::*;

async fn lookup(id: u32) -> Outcome<String, String> {
    if id == 0 {
        Outcome::failure("no such user".to_string())
    } else {
        Outcome::success(format!("user-{id}"))
    }
}

async fn parse(raw: &'static str) -> Result<u32, std::num::ParseIntError> {
    raw.parse()
}

#[tokio::test]
async fn outcome_future_into_pipeline() {
    let len = lookup(7).into_pipeline().map(|name| name.len()).await;
    assert_eq!(len, Outcome::success(6));

    let missing = lookup(0).into_pipeline().map(|name| name.len()).await;
    assert_eq!(missing, Outcome::failure("no such user".to_string()));
}

#[tokio::test]
async fn result_future_into_outcome() {
    assert_eq!(parse("5").into_outcome().await, Outcome::success(5));
    assert!(parse("five").into_outcome().await.is_failure());
}

#[tokio::test]
async fn result_future_into_pipeline_via_outcome() {
    let outcome = parse("20")
        .into_outcome()
        .into_pipeline()
        .map_failure(|e| e.to_string())
        .filter(|n| *n >= 18, "underage".to_string())
        .await;

    assert_eq!(outcome, Outcome::success(20));
}
