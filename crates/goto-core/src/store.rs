// crates/goto-core/src/store.rs - Root Store
//
// Loads every root record from an ordered list of storage locations and
// merges them into one collection keyed by identifier.
//
// MERGE RULES:
// - Locations are read in the order given; a later location's record for an
//   identifier replaces an earlier one (local overrides global).
// - Inside one location, files are visited in sorted file-name order and the
//   first record claiming an identifier is kept, so the result never depends
//   on directory iteration order.
// - A record that cannot be read or decoded is skipped with a warning; the
//   remaining bookmarks stay available.
//
// The store is read-only once built. Edits go straight to record files.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::paths::expand_home;
use crate::root::Root;

/// Which storage tier a record was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Shared definitions, typically kept under version control
    Global,
    /// Machine-specific definitions
    Local,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Global => write!(f, "global"),
            Tier::Local => write!(f, "local"),
        }
    }
}

/// A directory of root records belonging to one tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    pub tier: Tier,
    pub dir: PathBuf,
}

impl StorageLocation {
    pub fn new(tier: Tier, dir: impl Into<PathBuf>) -> Self {
        Self {
            tier,
            dir: dir.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct StoredRoot {
    root: Root,
    base_path: PathBuf,
    source: Option<PathBuf>,
    tier: Option<Tier>,
}

/// Merged, read-only collection of roots
#[derive(Debug, Clone, Default)]
pub struct RootStore {
    roots: HashMap<String, StoredRoot>,
}

impl RootStore {
    /// Load all tiers in order, expanding `~` in base paths against `home`
    ///
    /// Never fails: a missing directory is an empty tier and unreadable
    /// records are skipped.
    pub fn load(locations: &[StorageLocation], home: Option<&Path>) -> Self {
        let mut store = Self::default();

        for location in locations {
            let mut seen = HashSet::new();

            for file in record_files(&location.dir) {
                let root = match Root::from_file(&file) {
                    Ok(root) => root,
                    Err(e) => {
                        warn!("Skipping root record: {}", e);
                        continue;
                    }
                };

                if !seen.insert(root.identifier.clone()) {
                    warn!(
                        "Skipping {}: identifier '{}' already defined in {} tier",
                        file.display(),
                        root.identifier,
                        location.tier
                    );
                    continue;
                }

                if store.roots.contains_key(&root.identifier) {
                    debug!(
                        "{} tier overrides root '{}' from {}",
                        location.tier,
                        root.identifier,
                        file.display()
                    );
                }

                store.insert(root, home, Some(file), Some(location.tier));
            }
        }

        debug!("Loaded {} roots", store.roots.len());
        store
    }

    /// Build a store from in-memory roots; later entries win collisions
    pub fn from_roots(roots: impl IntoIterator<Item = Root>) -> Self {
        let mut store = Self::default();
        for root in roots {
            store.insert(root, None, None, None);
        }
        store
    }

    fn insert(&mut self, root: Root, home: Option<&Path>, source: Option<PathBuf>, tier: Option<Tier>) {
        let base_path = expand_home(&root.base_path, home);
        self.roots.insert(
            root.identifier.clone(),
            StoredRoot {
                root,
                base_path,
                source,
                tier,
            },
        );
    }

    pub fn get(&self, identifier: &str) -> Option<&Root> {
        self.roots.get(identifier).map(|stored| &stored.root)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.roots.contains_key(identifier)
    }

    /// Every identifier in the store, in no particular order
    pub fn all_identifiers(&self) -> HashSet<String> {
        self.roots.keys().cloned().collect()
    }

    /// Identifiers sorted for display
    pub fn sorted_identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.roots.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Base path of a root with `~` already expanded
    pub fn base_path(&self, identifier: &str) -> Option<&Path> {
        self.roots
            .get(identifier)
            .map(|stored| stored.base_path.as_path())
    }

    /// Record file the winning definition was read from
    pub fn source_of(&self, identifier: &str) -> Option<&Path> {
        self.roots
            .get(identifier)
            .and_then(|stored| stored.source.as_deref())
    }

    /// Tier the winning definition was read from
    pub fn tier_of(&self, identifier: &str) -> Option<Tier> {
        self.roots.get(identifier).and_then(|stored| stored.tier)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// `*.json` regular files in `dir`, sorted by path
fn record_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        debug!("No root records at {}", dir.display());
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    files.sort();
    files
}
