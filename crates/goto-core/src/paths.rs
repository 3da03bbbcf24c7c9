// crates/goto-core/src/paths.rs - Filesystem Layout
//
// Every location goto reads from or writes to is derived from a single goto
// directory and carried around in `GotoPaths`. The CLI decides which
// directory that is (flag, environment, platform default); the library only
// ever sees the finished struct.
//
// LAYOUT:
// <goto_dir>/
// ├── config.json        current root + preferences
// ├── roots/             global tier (shared, versionable)
// │   └── <id>.json
// └── local/
//     └── roots/         local tier (machine-specific, overrides global)
//         └── <id>.json

use std::path::{Path, PathBuf};

use crate::store::{StorageLocation, Tier};

/// Resolved locations of every file goto uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GotoPaths {
    /// The goto directory itself
    pub root_dir: PathBuf,

    /// Path of the config record
    pub config_file: PathBuf,

    /// Directory of root records shared across machines
    pub global_roots: PathBuf,

    /// Directory of root records for this machine only
    pub local_roots: PathBuf,

    /// Home directory used to expand `~` in base paths
    pub home: Option<PathBuf>,
}

impl GotoPaths {
    /// Lay out the standard structure under `dir`
    pub fn under(dir: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        let root_dir = dir.into();
        Self {
            config_file: root_dir.join("config.json"),
            global_roots: root_dir.join("roots"),
            local_roots: root_dir.join("local").join("roots"),
            root_dir,
            home,
        }
    }

    /// Storage tiers in load order: global first, so local wins collisions
    pub fn locations(&self) -> Vec<StorageLocation> {
        vec![
            StorageLocation::new(Tier::Global, self.global_roots.clone()),
            StorageLocation::new(Tier::Local, self.local_roots.clone()),
        ]
    }

    /// Directory a tier's records live in
    pub fn tier_dir(&self, tier: Tier) -> &Path {
        match tier {
            Tier::Global => &self.global_roots,
            Tier::Local => &self.local_roots,
        }
    }
}

/// Expand a leading `~` in `path` against `home`
///
/// Only the bare `~` and `~/...` forms are expanded; `~user` is left alone,
/// as is everything when no home directory is known.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    match path
        .strip_prefix("~/")
        .or_else(|| path.strip_prefix("~\\"))
    {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}
