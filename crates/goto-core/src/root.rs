// crates/goto-core/src/root.rs - Root Bookmark Sets
//
// A root is one named bookmark namespace. Each root is persisted as its own
// JSON record (`<identifier>.json`) so that global and local tiers can hold
// different definitions of the same identifier.
//
// RECORD SHAPE:
// {
//     "identifier": "proj",
//     "name": "My Project",            (optional display name)
//     "base_path": "~/src/proj",
//     "defaults": ["common"],
//     "shortcuts": { "docs": "documentation", "root": "" }
// }
//
// Records written by older versions used `root` and `path` for the first
// two fields; both spellings are accepted on read.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur reading or writing root records
#[derive(Error, Debug)]
pub enum RootError {
    #[error("I/O error on root record {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed root record {file}: {error}")]
    Malformed { file: String, error: String },

    #[error("Root record {file} has an empty identifier")]
    MissingIdentifier { file: String },

    #[error("Invalid root identifier '{0}': must be non-empty and contain no path separators")]
    InvalidIdentifier(String),

    #[error("Root record already exists: {0}")]
    AlreadyExists(String),
}

/// Result type for root record operations
pub type RootResult<T> = Result<T, RootError>;

/// Shortcut name -> path suffix, kept in file order
pub type Shortcuts = IndexMap<String, String>;

/// A named bookmark set
///
/// Unknown fields in a record are ignored on decode, so newer records can
/// still be read by older builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Unique key of this root within the merged store
    #[serde(alias = "root")]
    pub identifier: String,

    /// Human-friendly label shown in messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Directory every shortcut is relative to; may be empty or start with `~`
    #[serde(alias = "path")]
    pub base_path: String,

    /// Roots whose shortcuts this root inherits, in precedence order
    #[serde(default)]
    pub defaults: Vec<String>,

    /// This root's own shortcuts
    #[serde(default)]
    pub shortcuts: Shortcuts,
}

impl Root {
    /// A root with no shortcuts and no defaults
    pub fn empty(
        identifier: impl Into<String>,
        name: Option<String>,
        base_path: impl Into<String>,
    ) -> RootResult<Self> {
        let identifier = identifier.into();
        if !is_valid_identifier(&identifier) {
            return Err(RootError::InvalidIdentifier(identifier));
        }

        Ok(Self {
            identifier,
            name,
            base_path: base_path.into(),
            defaults: Vec::new(),
            shortcuts: Shortcuts::new(),
        })
    }

    /// Name for display: the explicit name, or the identifier
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.identifier)
    }

    /// File name this root is stored under inside a tier directory
    pub fn file_name(&self) -> String {
        format!("{}.json", self.identifier)
    }

    /// Decode a record; `file` only labels errors
    pub fn from_json(content: &str, file: &str) -> RootResult<Self> {
        let root: Root = serde_json::from_str(content).map_err(|e| RootError::Malformed {
            file: file.to_string(),
            error: e.to_string(),
        })?;

        if root.identifier.trim().is_empty() {
            return Err(RootError::MissingIdentifier {
                file: file.to_string(),
            });
        }

        Ok(root)
    }

    /// Read and decode the record at `path`
    pub fn from_file(path: &Path) -> RootResult<Self> {
        let file = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| RootError::Io {
            file: file.clone(),
            source,
        })?;
        Self::from_json(&content, &file)
    }

    /// Encode this root as pretty-printed JSON
    pub fn to_json(&self) -> RootResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RootError::Malformed {
            file: self.file_name(),
            error: e.to_string(),
        })
    }

    /// Write this root into `dir`, replacing any existing record of the same name
    pub fn write_to_dir(&self, dir: &Path) -> RootResult<PathBuf> {
        let path = self.prepare_write(dir)?;
        let json = self.to_json()?;
        fs::write(&path, json + "\n").map_err(|source| RootError::Io {
            file: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }

    /// Write this root into `dir`, failing if the record already exists
    pub fn create_in_dir(&self, dir: &Path) -> RootResult<PathBuf> {
        let path = self.prepare_write(dir)?;
        let json = self.to_json()?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| match source.kind() {
                ErrorKind::AlreadyExists => RootError::AlreadyExists(path.display().to_string()),
                _ => RootError::Io {
                    file: path.display().to_string(),
                    source,
                },
            })?;

        writeln!(file, "{json}").map_err(|source| RootError::Io {
            file: path.display().to_string(),
            source,
        })?;

        Ok(path)
    }

    fn prepare_write(&self, dir: &Path) -> RootResult<PathBuf> {
        if !is_valid_identifier(&self.identifier) {
            return Err(RootError::InvalidIdentifier(self.identifier.clone()));
        }

        fs::create_dir_all(dir).map_err(|source| RootError::Io {
            file: dir.display().to_string(),
            source,
        })?;

        Ok(dir.join(self.file_name()))
    }
}

/// Identifiers double as file names, so they must be a single path component
pub fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.trim().is_empty()
        && identifier != "."
        && identifier != ".."
        && !identifier.contains(['/', '\\'])
}
