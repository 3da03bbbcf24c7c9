// crates/goto-cli/src/commands/current.rs - Set Current Root Command

use anyhow::Result;
use goto_core::{StateError, set_current};

use crate::context::Context;

/// Make `root` the current root and report the change
pub fn handle(ctx: &mut Context, root: &str) -> Result<()> {
    match set_current(&mut ctx.config, &ctx.paths.config_file, &ctx.store, root) {
        Ok(message) => {
            println!("{}", message);
            Ok(())
        }
        Err(e @ StateError::UnknownRoot { .. }) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
