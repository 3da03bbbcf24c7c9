use anyhow::{Result, anyhow};
use std::path::PathBuf;
use goto_core::{GotoConfig, GotoPaths, RootStore};

/// Application context that gets passed to command handlers
///
/// Everything is loaded once up front: the config record, then every root
/// record across both tiers. Handlers read from it and write changes
/// straight to disk.
pub struct Context {
    pub paths: GotoPaths,
    pub config: GotoConfig,
    pub store: RootStore,
}

impl Context {
    /// Work out the goto directory: --dir / GOTO_DIR (via clap), then platform default
    pub fn resolve_paths(dir: Option<PathBuf>) -> Result<GotoPaths> {
        let dir = match dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .map(|config| config.join("goto"))
                .ok_or_else(|| anyhow!("Could not determine config directory; pass --dir or set GOTO_DIR"))?,
        };

        Ok(GotoPaths::under(dir, dirs::home_dir()))
    }

    /// Load config and roots; a missing or malformed config is fatal
    pub fn load(paths: GotoPaths) -> Result<Self> {
        let config = GotoConfig::load(&paths.config_file)?;
        let store = RootStore::load(&paths.locations(), paths.home.as_deref());

        Ok(Self {
            paths,
            config,
            store,
        })
    }

    /// Current root as persisted, possibly dangling
    pub fn current_root(&self) -> &str {
        goto_core::get_current(&self.config)
    }

    /// Display label for a root id, falling back to the id when unknown
    pub fn root_label<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.store
            .get(identifier)
            .map_or(identifier, |root| root.display_name())
    }
}
