//! Core types: a single matchable key and the ordered collection of keys.

use std::slice;
use std::sync::Arc;

use serde::ser::{Serialize, Serializer};

use crate::normalize::normalize;

/// One UI key extracted from a corpus.
///
/// The normalised form is derived in [`Entry::new`] and never stored
/// independently, so it cannot drift from `key`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    /// The original text exactly as extracted (escapes already decoded).
    key: String,
    /// Display text. Equal to `key` for every corpus format today.
    label: String,
    /// Lower-cased, trimmed form of `key`. Matching only.
    #[serde(skip)]
    normalized_key: String,
    /// Length of `key` in Unicode scalar values.
    #[serde(skip)]
    key_len: usize,
}

impl Entry {
    /// Build an entry whose label is the key itself.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let label = key.clone();
        Self::with_label(key, label)
    }

    /// Build an entry with a display label that differs from the key.
    pub fn with_label(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            normalized_key: normalize(&key),
            key_len: key.chars().count(),
            label: label.into(),
            key,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The lower-cased, trimmed key used for substring matching.
    pub fn normalized_key(&self) -> &str {
        &self.normalized_key
    }

    /// Length of the original key in characters; the ranking tie-breaker.
    pub fn key_len(&self) -> usize {
        self.key_len
    }
}

/// An immutable, length-ordered sequence of [`Entry`] values.
///
/// Entries are sorted ascending by [`Entry::key_len`] at construction; equal
/// lengths keep their input order. Cloning is cheap (shared storage), which
/// lets readers keep a snapshot while a reload builds its replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCollection {
    entries: Arc<[Entry]>,
}

impl EntryCollection {
    /// An empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a collection from raw keys, one entry per key. Duplicates are
    /// kept.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(keys.into_iter().map(Entry::new).collect())
    }

    /// Build a collection from ready-made entries, applying the stable
    /// length ordering.
    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(Entry::key_len);
        Self {
            entries: entries.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// The first `n` entries in stored order (fewer if the collection is
    /// shorter).
    pub fn head(&self, n: usize) -> &[Entry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Keys in stored order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::key)
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for EntryCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}
