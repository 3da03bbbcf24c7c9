// crates/goto-core/src/resolve.rs - Resolution Engine and Path Resolver
//
// Computes the shortcut table a root actually exposes once its defaults are
// folded in, and turns a (root, shortcut) pair into a filesystem path.
//
// PRECEDENCE (highest first):
// 1. The root's own shortcuts
// 2. Its first default, including everything that default inherits
// 3. Its second default, and so on
//
// A default can only fill in names nobody above it has defined. Each root is
// entered at most once per resolution, which both breaks cycles and bounds
// the work to the number of roots in the store. The walk keeps its own stack
// rather than recursing, so a long chain of defaults cannot exhaust the call
// stack.

use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::trace;

use crate::root::{Root, Shortcuts};
use crate::store::RootStore;

/// Errors that can occur turning a shortcut into a path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Shortcut '{shortcut}' not found in root '{root}'")]
    NotFound { root: String, shortcut: String },

    #[error("Unknown root: {0}")]
    UnknownRoot(String),
}

/// Result type for path resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

struct Frame<'a> {
    root: &'a Root,
    next_default: usize,
}

/// Effective shortcut table of `identifier`
///
/// Returns an empty table when the root is absent. The stored root is never
/// modified; every call builds a fresh table, so repeated calls are equal.
/// Entries appear in precedence order: the root's own first, then each
/// default's contribution depth-first.
pub fn effective_shortcuts(store: &RootStore, identifier: &str) -> Shortcuts {
    let mut table = Shortcuts::new();

    let Some(start) = store.get(identifier) else {
        return table;
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = Vec::new();

    visited.insert(start.identifier.as_str());
    merge_missing(&mut table, start);
    stack.push(Frame {
        root: start,
        next_default: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let root = frame.root;
        let Some(default) = root.defaults.get(frame.next_default) else {
            stack.pop();
            continue;
        };
        frame.next_default += 1;

        if !visited.insert(default.as_str()) {
            trace!(
                "Default '{}' of '{}' already resolved, skipping",
                default, root.identifier
            );
            continue;
        }

        match store.get(default) {
            Some(inherited) => {
                merge_missing(&mut table, inherited);
                stack.push(Frame {
                    root: inherited,
                    next_default: 0,
                });
            }
            None => trace!(
                "Default '{}' of '{}' is not a known root",
                default, root.identifier
            ),
        }
    }

    table
}

fn merge_missing(table: &mut Shortcuts, root: &Root) {
    for (name, suffix) in &root.shortcuts {
        if !table.contains_key(name) {
            table.insert(name.clone(), suffix.clone());
        }
    }
}

/// Resolve `shortcut` within `root` to a full path
///
/// The path is built by name only; whether it exists on disk is the
/// caller's business. An empty suffix yields the base path itself.
pub fn resolve(store: &RootStore, root: &str, shortcut: &str) -> ResolveResult<PathBuf> {
    let not_found = || ResolveError::NotFound {
        root: root.to_string(),
        shortcut: shortcut.to_string(),
    };

    let shortcuts = effective_shortcuts(store, root);
    let suffix = shortcuts.get(shortcut).ok_or_else(not_found)?;
    let base = store.base_path(root).ok_or_else(not_found)?;

    if suffix.is_empty() {
        Ok(base.to_path_buf())
    } else {
        Ok(base.join(suffix))
    }
}

/// Like [`resolve`], but reports an absent root as `UnknownRoot`
///
/// Used when the user named the root explicitly and deserves to hear that
/// it does not exist, rather than that the shortcut is missing.
pub fn resolve_in_known_root(
    store: &RootStore,
    root: &str,
    shortcut: &str,
) -> ResolveResult<PathBuf> {
    if !store.contains(root) {
        return Err(ResolveError::UnknownRoot(root.to_string()));
    }
    resolve(store, root, shortcut)
}
