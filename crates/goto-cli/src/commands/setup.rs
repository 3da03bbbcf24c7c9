// crates/goto-cli/src/commands/setup.rs - First-time Setup Command
//
// Like `init` in other tools, setup runs before any config exists, so it
// works from bare paths instead of a loaded Context. It overwrites the
// config and the two starter roots, hence the confirmation.
//
// CREATED STRUCTURE:
// goto_dir/
// ├── config.json          {"current_root": "goto"}
// ├── roots/
// │   ├── com.json         shortcuts usable from anywhere
// │   └── goto.json        points at the goto directory itself
// └── local/roots/

use anyhow::{Context as AnyhowContext, Result};
use goto_core::{GotoConfig, GotoPaths, Root};
use std::fs;

use crate::stdin::confirm;

pub fn handle(paths: &GotoPaths, yes: bool) -> Result<()> {
    if !yes && !confirm("press 'y' to confirm config overwrite:")? {
        println!("aborting");
        return Ok(());
    }

    for dir in [&paths.global_roots, &paths.local_roots] {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    GotoConfig::new("goto").save(&paths.config_file)?;

    for root in starter_roots(paths)? {
        root.write_to_dir(&paths.global_roots)?;
    }

    println!("✅ Wrote config files to {}", paths.root_dir.display());
    println!();
    println!("💡 Next steps:");
    println!("   goto -r                 # list roots");
    println!("   goto -n proj \"My Project\" ~/src/proj");
    println!("   goto -s proj && goto -a");

    Ok(())
}

fn starter_roots(paths: &GotoPaths) -> Result<Vec<Root>> {
    let mut common = Root::empty("com", Some("common".to_string()), "")?;
    common.shortcuts.insert("root".into(), String::new());
    common.shortcuts.insert("/".into(), String::new());

    let mut goto = Root::empty("goto", None, paths.root_dir.display().to_string())?;
    goto.shortcuts.insert("roots".into(), "roots".into());
    goto.shortcuts.insert("local".into(), "local/roots".into());

    Ok(vec![common, goto])
}
