//! gettext catalog (`.po`) corpus.
//!
//! Only source strings (`msgid`) are extracted. The scan is a two-state
//! machine over trimmed lines:
//!
//! ```text
//! Outside  --msgid "..."-->  InSource   (accumulator := capture)
//! InSource --"..."------->   InSource   (accumulator += capture)
//! any      --msgstr------>   Outside    (emit accumulator if non-blank)
//! ```
//!
//! Input that ends while still in `InSource` drops the pending string.

use crate::error::Result;
use crate::normalize::decode_escapes;

use super::{CorpusFormat, KeyExtractor};

const SOURCE_TOKEN: &str = "msgid \"";
const TRANSLATION_TOKEN: &str = "msgstr";

/// Extracts `msgid` values from a gettext catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogExtractor;

impl KeyExtractor for CatalogExtractor {
    fn format(&self) -> CorpusFormat {
        CorpusFormat::Catalog
    }

    /// Never fails: a catalog without declarations yields no keys.
    fn extract_keys(&self, content: &str) -> Result<Vec<String>> {
        let mut scanner = CatalogScanner::default();
        for line in content.lines() {
            scanner.feed(line);
        }
        Ok(scanner.finish())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ScanState {
    #[default]
    Outside,
    InSource,
}

#[derive(Debug, Default)]
struct CatalogScanner {
    state: ScanState,
    pending: String,
    keys: Vec<String>,
}

impl CatalogScanner {
    fn feed(&mut self, raw_line: &str) {
        let line = raw_line.trim();

        if line.starts_with(SOURCE_TOKEN) {
            self.state = ScanState::InSource;
            if let Some(text) = declaration_literal(line) {
                self.pending = text.to_string();
            }
        } else if self.state == ScanState::InSource && line.starts_with('"') {
            if let Some(text) = quoted_literal(line) {
                self.pending.push_str(text);
            }
        } else if line.starts_with(TRANSLATION_TOKEN) {
            self.state = ScanState::Outside;
            let raw = std::mem::take(&mut self.pending);
            if !raw.trim().is_empty() {
                self.keys.push(decode_escapes(&raw));
            }
        }
    }

    fn finish(self) -> Vec<String> {
        if self.state == ScanState::InSource && !self.pending.is_empty() {
            tracing::trace!("catalog ended inside a msgid; pending string dropped");
        }
        self.keys
    }
}

/// Text between the first quote after `msgid` and the last quote on the line.
fn declaration_literal(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("msgid")?.trim_start();
    quoted_literal(rest)
}

/// Text between a leading quote and the last quote on the line. `None` when
/// there is no closing quote.
fn quoted_literal(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('"')?;
    let close = inner.rfind('"')?;
    Some(&inner[..close])
}
