//! # uikey-search
//!
//! UI key extraction and ranked substring search for `{{ui:KEY}}` template
//! autocomplete.
//!
//! ## Design
//!
//! - Two corpus formats behind one [`KeyExtractor`] trait: a JSON string list
//!   and a gettext catalog (`msgid` values only)
//! - Keys are normalised (lower-case, trimmed) once, at construction
//! - Collections are ordered by key length and never mutated; a reload builds
//!   a new one
//! - Search is plain substring containment, ranked prefix-first then
//!   shortest-first, and never fails
//!
//! The only I/O is the single corpus read in [`load_corpus`] and the optional
//! [`export::StringListDocument::write_to_file`].

pub mod dedup;
pub mod error;
pub mod export;
pub mod extract;
pub mod format;
pub mod normalize;
pub mod rank;
pub mod types;

pub use error::{KeyError, Result};
pub use extract::{load_corpus, CatalogExtractor, CorpusFormat, KeyExtractor, StructuredListExtractor};
pub use format::{FormatSpec, FormattingOption, FORMATTING_OPTIONS};
pub use rank::DEFAULT_LIMIT;
pub use types::{Entry, EntryCollection};

/// Rank `collection` against `query`, returning at most `limit` entries.
///
/// Blank queries return the first `limit` entries in stored order. A
/// `limit` of zero returns nothing.
///
/// # Examples
///
/// ```
/// let keys = uikey_search::EntryCollection::from_keys(["DeployNow", "Deploy", "Redeploy"]);
/// let hits = uikey_search::search(&keys, "deploy", 2);
/// let labels: Vec<&str> = hits.iter().map(|e| e.label()).collect();
/// assert_eq!(labels, vec!["Deploy", "DeployNow"]);
/// ```
pub fn search(collection: &EntryCollection, query: &str, limit: usize) -> Vec<Entry> {
    rank::search(collection, query, limit)
}

/// Extract a collection from in-memory corpus text.
///
/// # Errors
///
/// Returns [`KeyError::Format`] if `content` does not match `format`.
///
/// # Examples
///
/// ```
/// # fn main() -> uikey_search::Result<()> {
/// let keys = uikey_search::extract(
///     r#"{"strings": ["Deploy", "Cancel", "OK"]}"#,
///     uikey_search::CorpusFormat::StructuredList,
/// )?;
/// assert_eq!(keys.keys().collect::<Vec<_>>(), vec!["OK", "Deploy", "Cancel"]);
/// # Ok(())
/// # }
/// ```
pub fn extract(content: &str, format: CorpusFormat) -> Result<EntryCollection> {
    format.extract(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_then_search() {
        let keys = extract(
            "msgid \"Deploy\"\nmsgstr \"\"\nmsgid \"Redeploy\"\nmsgstr \"\"\n",
            CorpusFormat::Catalog,
        )
        .expect("extract");
        let hits = search(&keys, "DEPLOY", DEFAULT_LIMIT);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].key(), "Deploy");
    }

    #[test]
    fn extract_rejects_wrong_shape() {
        let result = extract("[]", CorpusFormat::StructuredList);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("strings"));
    }
}
