// crates/goto-cli/src/commands/edit.rs - Record Editing Commands
//
// goto decides which file to open; the editor does the rest. New roots are
// written to the local tier and never overwrite an existing record.

use anyhow::Result;
use goto_core::{Root, RootError, Tier};

use crate::context::Context;
use crate::services::EditorService;

/// `goto -o <root>`: open the record that supplied `root`
pub fn open(ctx: &Context, root: &str) -> Result<()> {
    let Some(source) = ctx.store.source_of(root) else {
        eprintln!("❌ Error opening root: {} is not a known root", root);
        std::process::exit(1);
    };

    println!("Opening file {}", source.display());
    EditorService::open_file(source, ctx.config.editor.as_deref())
}

/// `goto -c`: open config.json
pub fn config(ctx: &Context) -> Result<()> {
    println!("Editing configs");
    EditorService::open_file(&ctx.paths.config_file, ctx.config.editor.as_deref())
}

/// `goto -n <id> <name> [base_path]`: write an empty root and open it
pub fn new(ctx: &Context, identifier: &str, name: &str, base_path: Option<&str>) -> Result<()> {
    match ctx.store.tier_of(identifier) {
        Some(Tier::Global) => eprintln!(
            "⚠️ Root {} already exists in the global tier; the new local record will override it",
            identifier
        ),
        Some(Tier::Local) => {
            let location = ctx
                .store
                .source_of(identifier)
                .map(|path| path.display().to_string())
                .unwrap_or_default();
            eprintln!(
                "❌ ERROR! root {} already exists in the local tier at {}",
                identifier, location
            );
            std::process::exit(1);
        }
        None => {}
    }

    let root = Root::empty(identifier, Some(name.to_string()), base_path.unwrap_or(""))?;

    let path = match root.create_in_dir(ctx.paths.tier_dir(Tier::Local)) {
        Ok(path) => path,
        Err(RootError::AlreadyExists(path)) => {
            eprintln!("❌ ERROR! root {} already exists at {}", identifier, path);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    println!("✅ Writing new root {} to {}", root.display_name(), path.display());
    EditorService::open_file(&path, ctx.config.editor.as_deref())
}
