//! Error types for the uikey-search crate.
//!
//! Every variant carries a message that can be shown to a user as-is.
//! Searching never fails; only corpus loading and export produce errors.

/// Errors that can occur while loading or exporting a key corpus.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The corpus location does not exist.
    #[error("corpus not found: {0}")]
    NotFound(String),

    /// The corpus content does not match the shape expected by the chosen
    /// extraction format. Also covers content that is not valid UTF-8.
    #[error("invalid corpus format: {0}")]
    Format(String),

    /// Any other failure reading or writing a corpus file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for uikey-search results.
pub type Result<T> = std::result::Result<T, KeyError>;
