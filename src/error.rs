//! Error types for the uikey host layer.

use uikey_search::KeyError;

/// Top-level error type for loading configuration and key corpora.
#[derive(Debug, thiserror::Error)]
pub enum UikeyError {
    /// Corpus loading failed (missing file, wrong shape).
    #[error("{0}")]
    Keys(#[from] KeyError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, UikeyError>;
