// crates/goto-core/src/config.rs - Configuration Record
//
// The config record is a small JSON file holding the current root and a
// few user preferences. Unlike root records there is exactly one of these
// and goto cannot do anything useful without it, so a missing or malformed
// config is an error rather than something to skip.
//
// RECORD SHAPE:
// {
//     "current_root": "proj",
//     "editor": "hx"          (optional)
// }
//
// Unknown fields are kept as-is and written back on save.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration loading and saving
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0} (run `goto --setup` to create it)")]
    NotFound(String),

    #[error("Malformed configuration in {file}: {error}")]
    Malformed { file: String, error: String },

    #[error("I/O error on config {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Persisted goto settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GotoConfig {
    /// Root used when a command does not name one
    ///
    /// Not validated against the store: it may name a root that has since
    /// been removed.
    pub current_root: String,

    /// Editor command for opening records (overrides GOTO_EDITOR/VISUAL/EDITOR)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Fields this build does not know about, preserved across saves
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GotoConfig {
    pub fn new(current_root: impl Into<String>) -> Self {
        Self {
            current_root: current_root.into(),
            editor: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Load the config record at `path`
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let file = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::NotFound(file));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            file: file.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Malformed {
            file,
            error: e.to_string(),
        })
    }

    /// Write the config record to `path`, creating its directory if needed
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            file: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        fs::write(path, self.to_json()? + "\n").map_err(io_error)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Malformed {
            file: "config".to_string(),
            error: e.to_string(),
        })
    }
}
