use rop_rail::validate_all;
use rop_rail::validation::{Messages, Validation};
use rop_rail::{Outcome, StateError, Variant};

#[test]
fn combine_all_valid_keeps_first_value() {
    let combined = Validation::<&str, String>::combine([
        Validation::valid("first"),
        Validation::valid("second"),
        Validation::valid("third"),
    ])
    .unwrap();

    assert_eq!(combined.into_value(), Ok("first"));
}

#[test]
fn combine_flattens_messages_in_order() {
    let combined = Validation::<(), &str>::combine([
        Validation::invalid("a"),
        Validation::valid(()),
        Validation::invalid_many(["b", "c"]).unwrap(),
        Validation::invalid("d"),
    ])
    .unwrap();

    assert_eq!(combined.into_errors().unwrap().to_vec(), vec!["a", "b", "c", "d"]);
}

#[test]
fn combine_single_entry_is_identity() {
    let only = Validation::<u8, &str>::invalid("only");
    assert_eq!(Validation::combine([only.clone()]), Ok(only));
}

#[test]
fn combine_with_never_fails() {
    let combined = Validation::combine_with(Validation::<u8, &str>::valid(1), []);
    assert_eq!(combined, Validation::valid(1));
}

#[test]
fn validate_all_follows_declaration_order() {
    let password = "short";
    let checked: Validation<&str, &str> = validate_all!(
        if password.is_empty() { Validation::invalid("password is empty") } else { Validation::valid(password) },
        if password.len() < 8 { Validation::invalid("password is too short") } else { Validation::valid(password) },
        if password.chars().any(|c| c.is_ascii_digit()) {
            Validation::valid(password)
        } else {
            Validation::invalid("password needs a digit")
        },
    );

    assert_eq!(
        checked.into_errors().unwrap().to_vec(),
        vec!["password is too short", "password needs a digit"]
    );
}

#[test]
fn accessors_on_wrong_side() {
    let valid = Validation::<u8, &str>::valid(1);
    assert_eq!(
        valid.errors().unwrap_err(),
        StateError::WrongVariant { expected: Variant::Invalid, found: Variant::Valid }
    );

    let invalid = Validation::<u8, &str>::invalid("bad");
    assert_eq!(
        invalid.value().unwrap_err(),
        StateError::WrongVariant { expected: Variant::Valid, found: Variant::Invalid }
    );
}

#[test]
fn zip_accumulates_both_sides() {
    let a = Validation::<u8, &str>::invalid("a");
    let b = Validation::<&str, &str>::invalid("b");
    assert_eq!(a.zip(b).into_errors().unwrap().to_vec(), vec!["a", "b"]);

    let ok = Validation::<u8, &str>::valid(1).zip(Validation::valid("x"));
    assert_eq!(ok.into_value(), Ok((1, "x")));
}

#[test]
fn and_then_stops_at_first_invalid() {
    let mut called = false;
    let v = Validation::<u8, &str>::invalid("first").and_then(|n| {
        called = true;
        Validation::valid(n + 1)
    });

    assert!(v.is_invalid());
    assert!(!called);
}

#[test]
fn map_messages_preserves_order() {
    let v = Validation::<(), &str>::invalid_many(["a", "bb"]).unwrap().map_messages(str::len);
    assert_eq!(v.into_errors().unwrap().to_vec(), vec![1, 2]);
}

#[test]
fn into_outcome_and_result() {
    let v = Validation::<u8, &str>::invalid("too young");
    assert_eq!(v.clone().into_outcome(|m| m.into_first()), Outcome::failure("too young"));

    let result: Result<u8, Messages<&str>> = v.into();
    assert_eq!(result.unwrap_err().first(), &"too young");
}

#[test]
fn messages_display_joins_with_comma() {
    let mut messages = Messages::new("E1");
    messages.push("E2");
    assert_eq!(messages.to_string(), "E1, E2");
    assert_eq!(messages.into_first(), "E1");
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_empty_messages() {
    let v = Validation::<u8, String>::invalid("bad".to_string());
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"Invalid":["bad"]}"#);

    let back: Validation<u8, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);

    let empty = serde_json::from_str::<Validation<u8, String>>(r#"{"Invalid":[]}"#);
    assert!(empty.is_err());
}
