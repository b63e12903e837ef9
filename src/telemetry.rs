//! Tracing setup for hosts embedding the key index.
//!
//! Output goes to stderr so that hosts talking a protocol over stdout keep
//! that channel clean.

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `default_filter` (for example `"uikey=info"`). Returns `false` if a
/// global subscriber was already installed; the existing one is kept.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
