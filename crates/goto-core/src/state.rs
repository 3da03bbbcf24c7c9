// crates/goto-core/src/state.rs - Current-Root State
//
// The current root is the root used whenever a command omits one. It lives
// in the config record. Reading it never consults the store, so a dangling
// value (a root deleted after it was selected) comes back as-is and the
// resolution engine treats it as a root with no shortcuts.

use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, GotoConfig};
use crate::store::RootStore;

/// Errors that can occur changing the current root
#[derive(Error, Debug)]
pub enum StateError {
    #[error("{requested} not recognized, current root is still {current}")]
    UnknownRoot { requested: String, current: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for current-root operations
pub type StateResult<T> = Result<T, StateError>;

/// The persisted current root, whether or not it still exists
pub fn get_current(config: &GotoConfig) -> &str {
    &config.current_root
}

/// Make `new_root` current and persist the config to `config_path`
///
/// Fails without touching disk when `new_root` is not in the store. On
/// success returns a confirmation naming the previous and new roots.
pub fn set_current(
    config: &mut GotoConfig,
    config_path: &Path,
    store: &RootStore,
    new_root: &str,
) -> StateResult<String> {
    let previous = config.current_root.clone();

    let Some(root) = store.get(new_root) else {
        return Err(StateError::UnknownRoot {
            requested: new_root.to_string(),
            current: previous,
        });
    };

    let mut updated = config.clone();
    updated.current_root = root.identifier.clone();
    updated.save(config_path)?;
    *config = updated;

    info!("Current root changed from '{}' to '{}'", previous, new_root);

    let previous_label = match store.get(&previous) {
        Some(prev) if prev.display_name() != prev.identifier => {
            format!("{} ({})", prev.identifier, prev.display_name())
        }
        _ => previous,
    };
    let new_label = if root.display_name() != root.identifier {
        format!("{} ({})", root.identifier, root.display_name())
    } else {
        root.identifier.clone()
    };

    Ok(format!(
        "Current root changed from {previous_label} to {new_label}"
    ))
}
