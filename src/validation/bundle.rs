//! Message bundles for validators.
//!
//! Field validators look their human-readable messages up through a
//! [`MessageProvider`] handed to them explicitly, instead of reaching for a
//! global locale table. A missing key falls back to the key itself, so an
//! untranslated message is still readable.

use crate::types::alloc_type::{Cow, String};
use alloc_map::BTreeMap;

#[cfg(feature = "std")]
use std::collections as alloc_map;
#[cfg(not(feature = "std"))]
use alloc::collections as alloc_map;

/// Looks up a message by key.
pub trait MessageProvider {
    /// Returns the message registered under `key`, or `key` itself.
    fn message<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

impl<P: MessageProvider + ?Sized> MessageProvider for &P {
    #[inline]
    fn message<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        (**self).message(key)
    }
}

impl MessageProvider for BTreeMap<String, String> {
    fn message<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.get(key) {
            Some(message) => Cow::Borrowed(message.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}

#[cfg(feature = "std")]
impl<S: std::hash::BuildHasher> MessageProvider for std::collections::HashMap<String, String, S> {
    fn message<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.get(key) {
            Some(message) => Cow::Borrowed(message.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}

/// An in-memory message bundle for one locale.
///
/// # Examples
///
/// ```
/// use rop_rail::validation::{MessageProvider, StaticMessages};
///
/// let messages = StaticMessages::new("en")
///     .with("empty_email", "Email must not be empty")
///     .with("underage", "You must be at least 18");
///
/// assert_eq!(messages.locale(), "en");
/// assert_eq!(messages.message("underage"), "You must be at least 18");
/// assert_eq!(messages.message("unknown_key"), "unknown_key");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMessages {
    locale: String,
    entries: BTreeMap<String, String>,
}

impl StaticMessages {
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into(), entries: BTreeMap::new() }
    }

    /// Registers `message` under `key`, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries.insert(key.into(), message.into());
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageProvider for StaticMessages {
    #[inline]
    fn message<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        self.entries.message(key)
    }
}

impl<K, V> Extend<(K, V)> for StaticMessages
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
