// crates/goto-cli/src/commands/jump.rs - Shortcut Resolution Command
//
// The default mode: turn `goto <shortcut>` or `goto <root> <shortcut>` into
// a path. The path is the only thing written to stdout (or to --out-file),
// so a shell function can `cd` straight into it. Failures go to stderr with
// exit status 1.

use anyhow::{Context as AnyhowContext, Result};
use goto_core::ResolveError;
use goto_core::resolve::{resolve, resolve_in_known_root};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::context::Context;

/// Resolve a shortcut and emit the path
///
/// With one word, the word is a shortcut in the current root. With two,
/// the first names the root explicitly and must exist.
pub fn handle(ctx: &Context, first: &str, second: Option<&str>, out_file: Option<&Path>) -> Result<()> {
    let result = match second {
        Some(shortcut) => resolve_in_known_root(&ctx.store, first, shortcut),
        None => {
            let current = ctx.current_root();
            if !ctx.store.contains(current) {
                warn!("Current root '{}' no longer exists", current);
            }
            resolve(&ctx.store, current, first)
        }
    };

    match result {
        Ok(path) => emit(&path, out_file),
        Err(ResolveError::NotFound { root, shortcut }) => {
            eprintln!(
                "❌ Shortcut '{}' not found in {}",
                shortcut,
                ctx.root_label(&root)
            );
            std::process::exit(1);
        }
        Err(ResolveError::UnknownRoot(root)) => {
            eprintln!("❌ Unknown root: {}", root);
            std::process::exit(1);
        }
    }
}

fn emit(path: &Path, out_file: Option<&Path>) -> Result<()> {
    match out_file {
        Some(file) => fs::write(file, path.as_os_str().as_encoded_bytes())
            .with_context(|| format!("Failed to write path to {}", file.display())),
        None => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
