//! Structured-list corpus: a JSON object with a `strings` array.

use serde_json::Value;

use crate::error::{KeyError, Result};

use super::{CorpusFormat, KeyExtractor};

/// Field that holds the key list.
pub const STRINGS_FIELD: &str = "strings";

/// Reads `{"strings": ["Deploy", "Cancel", ...]}`.
///
/// Other top-level fields are ignored. Strings are taken verbatim; no escape
/// decoding happens here because JSON has already done it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredListExtractor;

impl KeyExtractor for StructuredListExtractor {
    fn format(&self) -> CorpusFormat {
        CorpusFormat::StructuredList
    }

    fn extract_keys(&self, content: &str) -> Result<Vec<String>> {
        let document: Value = serde_json::from_str(content)
            .map_err(|e| KeyError::Format(format!("invalid JSON: {e}")))?;

        let strings = document
            .get(STRINGS_FIELD)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                KeyError::Format(format!("expected '{STRINGS_FIELD}' array"))
            })?;

        strings
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.as_str().map(str::to_owned).ok_or_else(|| {
                    KeyError::Format(format!(
                        "'{STRINGS_FIELD}' element {index} is not a string"
                    ))
                })
            })
            .collect()
    }
}
