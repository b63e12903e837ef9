//! Reloadable holder for the active key collection.
//!
//! [`KeyIndex`] owns one [`EntryCollection`] at a time. Searches rank a
//! snapshot of the current collection. [`KeyIndex::reload`] builds the new
//! collection with no lock held and swaps it in under a short write lock,
//! so readers see either the old list or the new one, never a mix. A failed
//! reload leaves the old collection active.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use uikey_search::{CorpusFormat, Entry, EntryCollection};

use crate::error::Result;

/// Where a reload reads its keys from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    path: PathBuf,
    format: CorpusFormat,
}

impl CorpusSource {
    pub fn new(path: impl Into<PathBuf>, format: CorpusFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CorpusFormat {
        self.format
    }

    /// Read and extract the corpus.
    ///
    /// # Errors
    ///
    /// Propagates [`uikey_search::KeyError`] from the extractor.
    pub fn load(&self) -> Result<EntryCollection> {
        Ok(uikey_search::load_corpus(&self.path, self.format)?)
    }
}

/// The active key collection plus reload coordination.
#[derive(Debug, Default)]
pub struct KeyIndex {
    active: RwLock<EntryCollection>,
    reload_gate: Mutex<()>,
}

impl KeyIndex {
    pub fn new(collection: EntryCollection) -> Self {
        Self {
            active: RwLock::new(collection),
            reload_gate: Mutex::new(()),
        }
    }

    /// Load `source` into a fresh index.
    ///
    /// # Errors
    ///
    /// Returns the extraction error if the corpus cannot be loaded.
    pub fn load(source: &CorpusSource) -> Result<Self> {
        Ok(Self::new(source.load()?))
    }

    /// The current collection. Cheap: the entries are shared, not copied.
    pub fn snapshot(&self) -> EntryCollection {
        self.active
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.active.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rank the current collection against `query`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Entry> {
        let snapshot = self.snapshot();
        let results = uikey_search::search(&snapshot, query, limit);
        tracing::debug!(count = results.len(), limit, "key search");
        results
    }

    /// Replace the active collection with `collection`.
    ///
    /// Waits for any reload in progress, so a replacement is never
    /// overwritten by a reload that started before it.
    pub fn replace(&self, collection: EntryCollection) {
        let _gate = self.reload_gate.lock().unwrap_or_else(|e| e.into_inner());
        self.swap(collection);
    }

    fn swap(&self, collection: EntryCollection) {
        let mut active = self.active.write().unwrap_or_else(|e| e.into_inner());
        *active = collection;
    }

    /// Re-read `source` and swap the result in.
    ///
    /// Concurrent reloads are serialized. On error the previous collection
    /// stays active and queryable.
    ///
    /// Returns the number of entries now active.
    ///
    /// # Errors
    ///
    /// Returns the extraction error unchanged.
    pub fn reload(&self, source: &CorpusSource) -> Result<usize> {
        let _gate = self.reload_gate.lock().unwrap_or_else(|e| e.into_inner());

        match source.load() {
            Ok(collection) => {
                let count = collection.len();
                self.swap(collection);
                tracing::info!(
                    path = %source.path().display(),
                    format = %source.format(),
                    count,
                    "reloaded UI keys"
                );
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(
                    path = %source.path().display(),
                    error = %err,
                    "reload failed; keeping previous keys"
                );
                Err(err)
            }
        }
    }
}
