// crates/goto-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per mode of the `goto` binary:
// - jump: resolve a shortcut to a path (default mode)
// - current: change the current root
// - show: print records, effective shortcuts, root listing
// - edit: open or create record files in the editor
// - complete: shell completion candidates
// - setup: first-time config (no Context needed)

pub mod complete;
pub mod current;
pub mod edit;
pub mod jump;
pub mod setup;
pub mod show;
