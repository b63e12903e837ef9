//! Configuration for the key index.
//!
//! ```toml
//! [corpus]
//! path = "external/form-builder-translations/ui-strings.json"
//! format = "structured_list"
//!
//! [search]
//! limit = 50
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uikey_search::{CorpusFormat, DEFAULT_LIMIT};

use crate::error::{Result, UikeyError};
use crate::index::CorpusSource;

/// Corpus location used when none is configured, relative to the workspace.
pub const DEFAULT_CORPUS_PATH: &str = "external/form-builder-translations/ui-strings.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UikeyConfig {
    /// Where the keys come from.
    pub corpus: CorpusConfig,
    /// Ranking settings.
    pub search: SearchSettings,
}

/// Corpus settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Corpus file. Relative paths resolve against the workspace root.
    pub path: PathBuf,
    /// Which extractor reads the file.
    pub format: CorpusFormat,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CORPUS_PATH),
            format: CorpusFormat::StructuredList,
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of key completions returned.
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl UikeyConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| UikeyError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| UikeyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/uikey/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("uikey").join("config.toml")
        } else if let Some(config) = dirs::config_dir() {
            config.join("uikey").join("config.toml")
        } else {
            PathBuf::from("/tmp/uikey-config/config.toml")
        }
    }

    /// Checks:
    /// - `search.limit` must be greater than 0
    /// - `corpus.path` must not be empty
    ///
    /// # Errors
    ///
    /// Returns [`UikeyError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.search.limit == 0 {
            return Err(UikeyError::Config(
                "search.limit must be greater than 0".into(),
            ));
        }
        if self.corpus.path.as_os_str().is_empty() {
            return Err(UikeyError::Config("corpus.path must not be empty".into()));
        }
        Ok(())
    }

    /// Resolve the corpus location against `workspace_root`.
    ///
    /// Absolute paths are used as they are.
    pub fn corpus_source(&self, workspace_root: &Path) -> CorpusSource {
        let path = if self.corpus.path.is_absolute() {
            self.corpus.path.clone()
        } else {
            workspace_root.join(&self.corpus.path)
        };
        CorpusSource::new(path, self.corpus.format)
    }
}
