//! Opt-in removal of repeated keys.
//!
//! Extraction keeps duplicates on purpose. Callers that want one entry per
//! key run [`deduplicate`] over the extracted collection.

use std::collections::HashSet;

use crate::types::{Entry, EntryCollection};

/// Keep the first occurrence of each exact `key`, preserving stored order.
///
/// Comparison is on the original key, so `"OK"` and `"ok"` both survive.
pub fn deduplicate(collection: &EntryCollection) -> EntryCollection {
    let mut seen: HashSet<&str> = HashSet::with_capacity(collection.len());
    let unique: Vec<Entry> = collection
        .iter()
        .filter(|entry| seen.insert(entry.key()))
        .cloned()
        .collect();
    EntryCollection::from_entries(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_keys_pass_through() {
        let c = EntryCollection::from_keys(["OK", "Cancel"]);
        assert_eq!(deduplicate(&c), c);
    }

    #[test]
    fn repeated_keys_collapsed() {
        let c = EntryCollection::from_keys(["Save", "OK", "Save", "OK", "Open"]);
        let deduped = deduplicate(&c);
        assert_eq!(deduped.keys().collect::<Vec<_>>(), vec!["OK", "Save", "Open"]);
    }

    #[test]
    fn case_variants_are_distinct() {
        let c = EntryCollection::from_keys(["OK", "ok"]);
        assert_eq!(deduplicate(&c).len(), 2);
    }

    #[test]
    fn input_collection_untouched() {
        let c = EntryCollection::from_keys(["OK", "OK"]);
        let _ = deduplicate(&c);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(deduplicate(&EntryCollection::empty()).is_empty());
    }
}
