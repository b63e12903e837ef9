//! uikey: autocomplete for `{{ui:KEY}}` templates in documentation.
//!
//! Keys come from the form builder's translation corpus, either the exported
//! JSON string list or the gettext catalog itself. This crate is the host
//! side of that pipeline:
//!
//! corpus → [`KeyIndex`] (reloadable) → [`CompletionProvider`] → editor
//!
//! # Architecture
//!
//! - **Extraction and ranking** live in [`uikey_search`]; this crate never
//!   re-implements them
//! - **`KeyIndex`**: owns the active collection and swaps it atomically on
//!   reload; a failed reload keeps the previous keys
//! - **Context detection**: finds the partial key or formatting suffix under
//!   the cursor
//! - **Configuration**: TOML, with defaults matching the translations
//!   checkout layout

pub mod config;
pub mod context;
pub mod error;
pub mod index;
pub mod provider;
pub mod telemetry;

pub use config::UikeyConfig;
pub use context::CompletionContext;
pub use error::{Result, UikeyError};
pub use index::{CorpusSource, KeyIndex};
pub use provider::{CompletionItem, CompletionKind, CompletionProvider};
pub use uikey_search::{CorpusFormat, Entry, EntryCollection};
