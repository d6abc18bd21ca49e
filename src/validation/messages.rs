use core::fmt;

use crate::types::ErrorVec;
use smallvec::smallvec;

/// Non-empty, insertion-ordered list of validation messages.
///
/// The only way to build a `Messages` is from at least one message, so an
/// [`Invalid`](crate::validation::Validation::Invalid) can never carry an
/// empty list.
///
/// # Examples
///
/// ```
/// use rop_rail::validation::Messages;
///
/// let mut messages = Messages::new("email is empty");
/// messages.push("name is too short");
/// assert_eq!(messages.first(), &"email is empty");
/// assert_eq!(messages.len(), 2);
///
/// assert!(Messages::<&str>::try_from_iter([]).is_none());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Messages<M> {
    items: ErrorVec<M>,
}

impl<M> Messages<M> {
    #[inline]
    pub fn new(first: M) -> Self {
        Self { items: smallvec![first] }
    }

    /// Collects messages, returning `None` when the iterator is empty.
    pub fn try_from_iter<I>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = M>,
    {
        let items: ErrorVec<M> = messages.into_iter().collect();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    #[inline]
    pub fn push(&mut self, message: M) {
        self.items.push(message);
    }

    /// Appends every message of `other`, keeping order.
    #[inline]
    pub fn append(&mut self, other: Messages<M>) {
        self.items.extend(other.items);
    }

    #[inline]
    pub fn first(&self) -> &M {
        &self.items[0]
    }

    /// Takes the first message, dropping the rest.
    pub fn into_first(self) -> M {
        let mut items = self.items;
        items.remove(0)
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[M] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, M> {
        self.items.iter()
    }

    #[inline]
    pub fn to_vec(&self) -> crate::types::alloc_type::Vec<M>
    where
        M: Clone,
    {
        self.items.to_vec()
    }

    /// Maps every message, preserving order and non-emptiness.
    pub fn map<N, F>(self, f: F) -> Messages<N>
    where
        F: FnMut(M) -> N,
    {
        Messages { items: self.items.into_iter().map(f).collect() }
    }
}

impl<M: fmt::Debug> fmt::Debug for Messages<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<M: fmt::Display> fmt::Display for Messages<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

impl<M> IntoIterator for Messages<M> {
    type Item = M;
    type IntoIter = smallvec::IntoIter<[M; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Messages<M> {
    type Item = &'a M;
    type IntoIter = core::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<M: serde::Serialize> serde::Serialize for Messages<M> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.items.as_slice(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, M: serde::Deserialize<'de>> serde::Deserialize<'de> for Messages<M> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = <ErrorVec<M> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from_iter(items)
            .ok_or_else(|| serde::de::Error::custom("validation messages must not be empty"))
    }
}
