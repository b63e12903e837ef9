//! Ranked substring search over an [`EntryCollection`].
//!
//! The pipeline is filter → rank → truncate:
//!
//! 1. Normalise the query the same way keys are normalised.
//! 2. Blank query: return the head of the collection in stored order.
//! 3. Keep entries whose normalised key contains the query.
//! 4. Sort prefix matches first, then by key length ascending. The sort is
//!    stable, so equal (prefix, length) pairs keep collection order.
//! 5. Truncate to `limit`.
//!
//! Ranking always runs over the full match set before truncation.

use std::cmp::Ordering;

use crate::normalize::normalize;
use crate::types::{Entry, EntryCollection};

/// Result bound used when the caller has no preference.
pub const DEFAULT_LIMIT: usize = 50;

/// A matching entry together with the primary ranking signal.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    entry: &'a Entry,
    prefix: bool,
}

/// Search `collection` for `query`, returning at most `limit` entries.
///
/// Never fails. A `limit` of zero or a query that matches nothing yields an
/// empty vector.
pub fn search(collection: &EntryCollection, query: &str, limit: usize) -> Vec<Entry> {
    if limit == 0 {
        return Vec::new();
    }
    let normalized_query = normalize(query);
    if normalized_query.is_empty() {
        return collection.head(limit).to_vec();
    }

    let mut candidates: Vec<Candidate<'_>> = collection
        .iter()
        .filter(|entry| entry.normalized_key().contains(normalized_query.as_str()))
        .map(|entry| Candidate {
            entry,
            prefix: entry.normalized_key().starts_with(normalized_query.as_str()),
        })
        .collect();

    candidates.sort_by(compare_candidates);
    candidates.truncate(limit);

    tracing::trace!(query = %normalized_query, count = candidates.len(), "ranked search");
    candidates.into_iter().map(|c| c.entry.clone()).collect()
}

/// [`search`] with [`DEFAULT_LIMIT`].
pub fn search_default(collection: &EntryCollection, query: &str) -> Vec<Entry> {
    search(collection, query, DEFAULT_LIMIT)
}

/// Prefix matches first, then shorter keys first.
fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.prefix
        .cmp(&a.prefix)
        .then_with(|| a.entry.key_len().cmp(&b.entry.key_len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(keys: &[&str]) -> EntryCollection {
        EntryCollection::from_keys(keys.iter().copied())
    }

    fn keys(results: &[Entry]) -> Vec<&str> {
        results.iter().map(Entry::key).collect()
    }

    #[test]
    fn blank_query_returns_head_in_stored_order() {
        let c = collection(&["Deploy", "Cancel", "OK"]);
        assert_eq!(keys(&search(&c, "", 2)), vec!["OK", "Deploy"]);
        assert_eq!(keys(&search(&c, "   ", 10)), vec!["OK", "Deploy", "Cancel"]);
    }

    #[test]
    fn byte_order_mark_query_is_blank() {
        let c = collection(&["Deploy", "OK"]);
        assert_eq!(keys(&search(&c, "\u{feff}", 10)), vec!["OK", "Deploy"]);
        assert_eq!(keys(&search(&c, "\u{feff}dep", 10)), vec!["Deploy"]);
    }

    #[test]
    fn prefix_match_outranks_shorter_substring_match() {
        let c = collection(&["Redeploy", "Deploy project now"]);
        assert_eq!(
            keys(&search(&c, "deploy", 10)),
            vec!["Deploy project now", "Redeploy"]
        );
    }

    #[test]
    fn shorter_prefix_match_wins_with_limit_one() {
        let c = collection(&["DeployNow", "Deploy"]);
        assert_eq!(keys(&search(&c, "deploy", 1)), vec!["Deploy"]);
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let c = collection(&["Save Draft"]);
        assert_eq!(keys(&search(&c, "  DRAFT ", 10)), vec!["Save Draft"]);
    }

    #[test]
    fn no_match_returns_empty() {
        let c = collection(&["Deploy", "Cancel"]);
        assert!(search(&c, "zzz", 10).is_empty());
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let c = collection(&["Deploy"]);
        assert!(search(&c, "deploy", 0).is_empty());
        assert!(search(&c, "", 0).is_empty());
    }

    #[test]
    fn ties_keep_collection_order() {
        let c = collection(&["xa-1", "xb-1", "ya-x", "yb-x"]);
        // "xa-1" and "xb-1" start with "x"; "ya-x" and "yb-x" contain it.
        assert_eq!(
            keys(&search(&c, "x", 10)),
            vec!["xa-1", "xb-1", "ya-x", "yb-x"]
        );
    }

    #[test]
    fn ranking_happens_before_truncation() {
        // The prefix match sorts last in the collection but must survive the cut.
        let c = collection(&["a-deploy", "b-deploy", "deploy-all-forms"]);
        assert_eq!(keys(&search(&c, "deploy", 1)), vec!["deploy-all-forms"]);
    }

    #[test]
    fn leading_whitespace_in_key_is_ignored_for_prefix() {
        let c = collection(&["  Deploy", "Redeploy"]);
        assert_eq!(keys(&search(&c, "deploy", 10))[0], "  Deploy");
    }

    #[test]
    fn duplicates_both_returned() {
        let c = collection(&["OK", "OK"]);
        assert_eq!(search(&c, "ok", 10).len(), 2);
    }

    #[test]
    fn default_limit_caps_results() {
        let many: Vec<String> = (0..120).map(|i| format!("key {i}")).collect();
        let c = EntryCollection::from_keys(many);
        assert_eq!(search_default(&c, "key").len(), DEFAULT_LIMIT);
        assert_eq!(search_default(&c, "").len(), DEFAULT_LIMIT);
    }

    #[test]
    fn search_is_deterministic() {
        let c = collection(&["Deploy", "Redeploy", "Deployment", "Undeploy"]);
        assert_eq!(search(&c, "deploy", 10), search(&c, "deploy", 10));
    }
}
