//! Key extraction: corpus text in, [`EntryCollection`] out.
//!
//! Each corpus format implements [`KeyExtractor`]. The caller picks the
//! format explicitly through [`CorpusFormat`]; content is never sniffed.

pub mod catalog;
pub mod structured;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KeyError, Result};
use crate::types::EntryCollection;

pub use catalog::CatalogExtractor;
pub use structured::StructuredListExtractor;

/// A corpus format that can be turned into UI keys.
///
/// Implementors only produce the raw key strings in corpus order. The
/// provided [`KeyExtractor::extract`] applies normalisation and the length
/// ordering shared by every format.
pub trait KeyExtractor {
    /// Which [`CorpusFormat`] this implementation reads.
    fn format(&self) -> CorpusFormat;

    /// Pull raw keys out of `content`, in the order they appear.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Format`] if `content` does not have the shape this
    /// format expects.
    fn extract_keys(&self, content: &str) -> Result<Vec<String>>;

    /// Extract and build the ordered collection.
    ///
    /// # Errors
    ///
    /// Same as [`KeyExtractor::extract_keys`].
    fn extract(&self, content: &str) -> Result<EntryCollection> {
        Ok(EntryCollection::from_keys(self.extract_keys(content)?))
    }
}

/// Supported corpus formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusFormat {
    /// JSON document with a `strings` array.
    StructuredList,
    /// gettext PO catalog; only `msgid` values are extracted.
    Catalog,
}

impl CorpusFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StructuredList => "structured_list",
            Self::Catalog => "catalog",
        }
    }

    pub fn all() -> &'static [CorpusFormat] {
        &[Self::StructuredList, Self::Catalog]
    }

    /// Run the extractor for this format over `content`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Format`] if `content` does not match the format.
    pub fn extract(self, content: &str) -> Result<EntryCollection> {
        match self {
            Self::StructuredList => StructuredListExtractor.extract(content),
            Self::Catalog => CatalogExtractor.extract(content),
        }
    }
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read the corpus at `path` once and extract it with `format`.
///
/// # Errors
///
/// - [`KeyError::NotFound`] if `path` does not exist.
/// - [`KeyError::Format`] if the file is not UTF-8 or does not match `format`.
/// - [`KeyError::Io`] for any other read failure.
pub fn load_corpus(path: &Path, format: CorpusFormat) -> Result<EntryCollection> {
    let bytes = std::fs::read(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => KeyError::NotFound(path.display().to_string()),
        _ => KeyError::Io(err),
    })?;
    let content = String::from_utf8(bytes).map_err(|err| {
        KeyError::Format(format!(
            "{} is not valid UTF-8: {err}",
            path.display()
        ))
    })?;

    let collection = format.extract(&content)?;
    tracing::debug!(
        path = %path.display(),
        %format,
        count = collection.len(),
        "corpus loaded"
    );
    Ok(collection)
}
