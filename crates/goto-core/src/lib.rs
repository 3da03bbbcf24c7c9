//! # goto-core
//!
//! Resolution engine behind the `goto` directory navigator.
//!
//! A *root* is a named bookmark set: a base path, a table of shortcut names
//! mapped to path suffixes, and a list of other roots ("defaults") whose
//! shortcuts it inherits. Roots live as one JSON record per file in two
//! storage tiers (global, then local) and are merged into a [`RootStore`].
//!
//! ```text
//! tiers ──▶ RootStore ──▶ effective_shortcuts ──▶ resolve ──▶ PathBuf
//!                │                                   ▲
//!                └────── current root (config) ──────┘
//! ```
//!
//! Nothing in this crate reads environment variables or touches the
//! filesystem outside the explicit [`GotoPaths`] it is handed.

pub mod complete;
pub mod config;
pub mod paths;
pub mod resolve;
pub mod root;
pub mod state;
pub mod store;

pub use complete::candidates;
pub use config::{ConfigError, ConfigResult, GotoConfig};
pub use paths::GotoPaths;
pub use resolve::{ResolveError, ResolveResult, effective_shortcuts, resolve};
pub use root::{Root, RootError, RootResult, Shortcuts};
pub use state::{StateError, StateResult, get_current, set_current};
pub use store::{RootStore, StorageLocation, Tier};
