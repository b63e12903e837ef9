//! Completion context detection for `{{ui:KEY|format}}` templates.
//!
//! Given the text of a line up to the cursor, decide whether the cursor sits
//! in the key part of a template, in its formatting suffix, or outside any
//! template.

/// Opening of a UI template.
pub const TEMPLATE_OPEN: &str = "{{ui:";

/// What the cursor is currently completing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// Inside `{{ui:` before any `|` or `}`; `query` is the partial key.
    Key { query: String },
    /// After `{{ui:KEY|`; `query` is the partial formatting spec.
    Formatting { query: String },
}

/// Inspect the text before the cursor.
///
/// Only the last template opening on the line is considered. Returns `None`
/// when that template is already closed or malformed:
///
/// - `{{ui:` followed by text without `}` or `|` → [`CompletionContext::Key`]
/// - `{{ui:` + a non-empty key without `}` or `|`, then `|`, then text
///   without `}` → [`CompletionContext::Formatting`]
pub fn detect(line_prefix: &str) -> Option<CompletionContext> {
    let start = line_prefix.rfind(TEMPLATE_OPEN)? + TEMPLATE_OPEN.len();
    let tail = &line_prefix[start..];

    match tail.find(['|', '}']) {
        None => Some(CompletionContext::Key {
            query: tail.to_string(),
        }),
        Some(split) if tail[split..].starts_with('|') && split > 0 => {
            let suffix = &tail[split + 1..];
            if suffix.contains('}') {
                None
            } else {
                Some(CompletionContext::Formatting {
                    query: suffix.to_string(),
                })
            }
        }
        Some(_) => None,
    }
}
