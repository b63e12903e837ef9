//! Completion items for `{{ui:...}}` templates.
//!
//! [`CompletionProvider`] turns a detected [`CompletionContext`] into the
//! items an editor shows: ranked keys inside the template, the fixed
//! formatting list after the pipe.

use serde::Serialize;
use uikey_search::format::formatting_options;
use uikey_search::{Entry, FormattingOption};

use crate::context::{self, CompletionContext};
use crate::index::KeyIndex;

/// Kind hint for the editor's icon column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionKind {
    /// A UI key.
    Value,
    /// A formatting suffix.
    Property,
}

/// One completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    /// Text shown in the list.
    pub label: String,
    /// Text inserted at the cursor.
    pub insert_text: String,
    pub kind: CompletionKind,
    /// Short one-line detail.
    pub detail: String,
    /// Markdown documentation shown beside the list.
    pub documentation: String,
    /// Sort key for editors that re-sort; `None` keeps list order.
    pub sort_text: Option<String>,
}

impl CompletionItem {
    fn for_key(entry: &Entry) -> Self {
        let key = entry.key();
        Self {
            label: entry.label().to_string(),
            insert_text: key.to_string(),
            kind: CompletionKind::Value,
            detail: "UI Template String".to_string(),
            documentation: format!(
                "**Template:** `{{{{ui:{key}}}}}`\n\n**With formatting:** `{{{{ui:{key}|bold}}}}`"
            ),
            sort_text: Some(key.to_string()),
        }
    }

    fn for_formatting(option: &FormattingOption) -> Self {
        Self {
            label: option.label.to_string(),
            insert_text: option.label.to_string(),
            kind: CompletionKind::Property,
            detail: "Formatting option".to_string(),
            documentation: option.description.to_string(),
            sort_text: None,
        }
    }
}

/// Builds completion items from a [`KeyIndex`].
#[derive(Debug)]
pub struct CompletionProvider<'a> {
    index: &'a KeyIndex,
    limit: usize,
}

impl<'a> CompletionProvider<'a> {
    pub fn new(index: &'a KeyIndex, limit: usize) -> Self {
        Self { index, limit }
    }

    /// Items for the text before the cursor, or `None` outside a template.
    pub fn complete(&self, line_prefix: &str) -> Option<Vec<CompletionItem>> {
        context::detect(line_prefix).map(|ctx| self.complete_context(&ctx))
    }

    /// Items for an already detected context.
    pub fn complete_context(&self, context: &CompletionContext) -> Vec<CompletionItem> {
        match context {
            CompletionContext::Key { query } => self
                .index
                .search(query, self.limit)
                .iter()
                .map(CompletionItem::for_key)
                .collect(),
            CompletionContext::Formatting { query } => formatting_options(query)
                .iter()
                .map(CompletionItem::for_formatting)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uikey_search::EntryCollection;

    fn index() -> KeyIndex {
        KeyIndex::new(EntryCollection::from_keys([
            "Redeploy",
            "DeployNow",
            "Deploy",
            "Cancel",
        ]))
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn key_context_returns_ranked_keys() {
        let index = index();
        let provider = CompletionProvider::new(&index, 50);
        let items = provider.complete("Click {{ui:dep").expect("in template");
        assert_eq!(labels(&items), vec!["Deploy", "DeployNow", "Redeploy"]);
        assert!(items.iter().all(|i| i.kind == CompletionKind::Value));
    }

    #[test]
    fn key_item_fields() {
        let index = index();
        let provider = CompletionProvider::new(&index, 1);
        let items = provider.complete("{{ui:Cancel").expect("in template");
        let item = &items[0];
        assert_eq!(item.insert_text, "Cancel");
        assert_eq!(item.detail, "UI Template String");
        assert_eq!(item.sort_text.as_deref(), Some("Cancel"));
        assert_eq!(
            item.documentation,
            "**Template:** `{{ui:Cancel}}`\n\n**With formatting:** `{{ui:Cancel|bold}}`"
        );
    }

    #[test]
    fn limit_bounds_key_items() {
        let index = index();
        let provider = CompletionProvider::new(&index, 2);
        assert_eq!(provider.complete("{{ui:").expect("in template").len(), 2);
    }

    #[test]
    fn formatting_context_returns_full_list() {
        let index = index();
        let provider = CompletionProvider::new(&index, 50);
        let items = provider.complete("{{ui:Deploy|zz").expect("in suffix");
        assert_eq!(items.len(), 7);
        assert_eq!(items[0].label, "bold");
        assert_eq!(items[0].documentation, "Bold text: **text**");
        assert!(items.iter().all(|i| i.kind == CompletionKind::Property));
        assert!(items.iter().all(|i| i.detail == "Formatting option"));
    }

    #[test]
    fn outside_template_is_none() {
        let index = index();
        let provider = CompletionProvider::new(&index, 50);
        assert!(provider.complete("Click Deploy").is_none());
        assert!(provider.complete("{{ui:Deploy}} done").is_none());
    }

    #[test]
    fn no_match_is_empty_list() {
        let index = index();
        let provider = CompletionProvider::new(&index, 50);
        assert_eq!(provider.complete("{{ui:zzz"), Some(vec![]));
    }

    #[test]
    fn items_serialize_for_host_protocol() {
        let index = index();
        let provider = CompletionProvider::new(&index, 1);
        let items = provider.complete("{{ui:Deploy").expect("in template");
        let json = serde_json::to_value(&items[0]).expect("serialize");
        assert_eq!(json["kind"], "value");
        assert_eq!(json["label"], "Deploy");
    }
}
