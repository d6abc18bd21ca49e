use rop_rail::validation::Validation;
use rop_rail::{StateError, Variant};

#[test]
fn display_names_both_variants() {
    let err = StateError::WrongVariant { expected: Variant::Valid, found: Variant::Invalid };
    assert_eq!(err.to_string(), "wrong variant accessed: expected Valid, found Invalid");
}

#[test]
fn empty_combine_is_reported() {
    let empty: Vec<Validation<u8>> = Vec::new();
    let err = Validation::combine(empty).unwrap_err();

    assert_eq!(err, StateError::EmptyCombine);
    assert_eq!(err.to_string(), "cannot combine an empty set of validations");
}

#[test]
fn implements_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&StateError::EmptyCombine);
}
