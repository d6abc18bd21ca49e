//! Macros for building validations.

/// Runs several validations of the same subject and accumulates their
/// messages in the order the validations are written.
///
/// Expands to [`Validation::combine_with`](crate::validation::Validation::combine_with),
/// so at least one validation is required and the result is never an
/// error. When every validation passes, the value of the first one is kept.
///
/// # Examples
///
/// ```
/// use rop_rail::validate_all;
/// use rop_rail::validation::Validation;
///
/// fn min_len(value: &str, min: usize, message: &str) -> Validation<String> {
///     if value.len() >= min {
///         Validation::valid(value.to_string())
///     } else {
///         Validation::invalid(message.to_string())
///     }
/// }
///
/// let name = "Al";
/// let checked = validate_all!(
///     min_len(name, 1, "name is empty"),
///     min_len(name, 3, "name is too short"),
/// );
///
/// assert_eq!(checked.into_errors().unwrap().to_vec(), vec!["name is too short".to_string()]);
/// ```
#[macro_export]
macro_rules! validate_all {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::validation::Validation::combine_with($first, [$($rest),*])
    };
}
