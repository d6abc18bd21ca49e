use rop_rail::{Outcome, ResultExt};

#[test]
fn into_outcome_preserves_side() {
    assert_eq!(Ok::<u8, &str>(1).into_outcome(), Outcome::success(1));
    assert_eq!(Err::<u8, &str>("e").into_outcome(), Outcome::failure("e"));
}

#[test]
fn into_pipeline_starts_from_result() {
    let outcome = "12"
        .parse::<u32>()
        .into_pipeline()
        .map_failure(|e| e.to_string())
        .map(|n| n + 1)
        .build();

    assert_eq!(outcome, Outcome::success(13));

    let failed = "x".parse::<u32>().into_pipeline().map_failure(|_| "not a number").build();
    assert_eq!(failed, Outcome::failure("not a number"));
}
