use rop_rail::validation::Validation;

#[test]
fn collect_gathers_values_when_all_valid() {
    let all: Validation<Vec<u8>, &str> = (1..=3).map(Validation::valid).collect();
    assert_eq!(all.into_value(), Ok(vec![1, 2, 3]));
}

#[test]
fn collect_accumulates_every_message() {
    let collected: Validation<Vec<u8>, &str> = vec![
        Validation::invalid("x"),
        Validation::valid(1),
        Validation::invalid_many(["y", "z"]).unwrap(),
    ]
    .into_iter()
    .collect();

    assert_eq!(collected.into_errors().unwrap().to_vec(), vec!["x", "y", "z"]);
}

#[test]
fn iter_messages_is_empty_for_valid() {
    let valid = Validation::<u8, &str>::valid(4);
    assert_eq!(valid.iter_messages().count(), 0);

    let invalid = Validation::<u8, &str>::invalid_many(["a", "b"]).unwrap();
    assert_eq!(invalid.iter_messages().copied().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn into_iter_yields_the_value_once() {
    let values: Vec<u8> = Validation::<u8, &str>::valid(9).into_iter().collect();
    assert_eq!(values, vec![9]);
    assert_eq!(Validation::<u8, &str>::invalid("no").into_iter().next(), None);
}
