//! Structured-list export.
//!
//! Turns an extracted collection (usually from a catalog) into the JSON
//! document that [`StructuredListExtractor`](crate::extract::StructuredListExtractor)
//! reads back. The exported list is unique and sorted, so it is stable
//! across runs regardless of catalog order.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KeyError, Result};
use crate::types::EntryCollection;

/// `{"source": ..., "count": ..., "strings": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringListDocument {
    /// Where the strings came from (typically the catalog path).
    pub source: String,
    /// Number of entries in `strings`.
    pub count: usize,
    /// Unique keys in lexicographic order.
    pub strings: Vec<String>,
}

impl StringListDocument {
    pub fn from_collection(source: impl Into<String>, collection: &EntryCollection) -> Self {
        let strings: Vec<String> = collection
            .keys()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self {
            source: source.into(),
            count: strings.len(),
            strings,
        }
    }

    /// Pretty-printed JSON. Non-ASCII text is written as-is.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Format`] if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| KeyError::Format(e.to_string()))
    }

    /// Write the document, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Io`] if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!(path = %path.display(), count = self.count, "string list exported");
        Ok(())
    }
}
