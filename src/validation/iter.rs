use crate::types::alloc_type::Vec;
use crate::validation::core::Validation;
use crate::validation::messages::Messages;

/// Collects validations into one, accumulating every message.
///
/// Values are gathered in order while no entry has failed; once any entry is
/// invalid the result is `Invalid` with the messages of every invalid entry.
///
/// # Examples
///
/// ```
/// use rop_rail::validation::Validation;
///
/// let all: Validation<Vec<i32>, &str> =
///     vec![Validation::valid(1), Validation::valid(2)].into_iter().collect();
/// assert_eq!(all.into_value(), Ok(vec![1, 2]));
///
/// let mixed: Validation<Vec<i32>, &str> =
///     vec![Validation::invalid("a"), Validation::valid(2), Validation::invalid("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(mixed.into_errors().unwrap().to_vec(), vec!["a", "b"]);
/// ```
impl<T, M> FromIterator<Validation<T, M>> for Validation<Vec<T>, M> {
    fn from_iter<I: IntoIterator<Item = Validation<T, M>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut values = Vec::with_capacity(lower);
        let mut messages: Option<Messages<M>> = None;

        for validation in iter {
            match validation {
                Validation::Valid(value) => {
                    if messages.is_none() {
                        values.push(value);
                    }
                },
                Validation::Invalid(more) => match messages.as_mut() {
                    Some(acc) => acc.append(more),
                    None => messages = Some(more),
                },
            }
        }

        match messages {
            Some(messages) => Validation::Invalid(messages),
            None => Validation::Valid(values),
        }
    }
}

impl<T, M> Validation<T, M> {
    /// Iterates over the messages; empty for a `Valid`.
    pub fn iter_messages(&self) -> core::slice::Iter<'_, M> {
        match self {
            Self::Valid(_) => <&[M]>::default().iter(),
            Self::Invalid(messages) => messages.iter(),
        }
    }
}

impl<T, M> IntoIterator for Validation<T, M> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Validation::Valid(value) => Some(value).into_iter(),
            Validation::Invalid(_) => None.into_iter(),
        }
    }
}
