// crates/goto-cli/src/commands/show.rs - Read-only Listing Commands
//
// -p prints raw records, -a prints the merged shortcut table of a root, -r
// lists roots. JSON output is pretty-printed with sorted keys so it diffs
// cleanly and pipes into jq.

use anyhow::Result;
use console::style;
use goto_core::effective_shortcuts;
use std::collections::BTreeMap;

use crate::context::Context;

/// `goto -p [all|configs|roots|<root>]`
pub fn print(ctx: &Context, what: Option<&str>) -> Result<()> {
    match what.unwrap_or("all") {
        "all" => print_root_record(ctx, ctx.current_root()),
        "configs" | "config" => {
            println!("{}", ctx.config.to_json()?);
            Ok(())
        }
        "roots" => {
            println!("{}", serde_json::to_string_pretty(&ctx.store.sorted_identifiers())?);
            Ok(())
        }
        other if ctx.store.contains(other) => print_root_record(ctx, other),
        other => {
            eprintln!("❌ Invalid print arg: {}", other);
            std::process::exit(1);
        }
    }
}

fn print_root_record(ctx: &Context, identifier: &str) -> Result<()> {
    match ctx.store.get(identifier) {
        Some(root) => {
            println!("{}", root.to_json()?);
            Ok(())
        }
        None => {
            eprintln!("❌ Unknown root: {}", identifier);
            std::process::exit(1);
        }
    }
}

/// `goto -a [root]`: every shortcut reachable from the root, own and inherited
pub fn all(ctx: &Context, root: Option<&str>) -> Result<()> {
    let root = match root {
        Some("all") | None => ctx.current_root(),
        Some(root) => root,
    };

    if !ctx.store.contains(root) {
        eprintln!("❌ Unknown root: {}", root);
        std::process::exit(1);
    }

    let sorted: BTreeMap<String, String> = effective_shortcuts(&ctx.store, root).into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&sorted)?);
    Ok(())
}

/// `goto -r`: one line per root, current root marked
pub fn roots(ctx: &Context) -> Result<()> {
    let current = ctx.current_root();

    for id in ctx.store.sorted_identifiers() {
        let marker = if id == current { "*" } else { " " };
        let tier = ctx
            .store
            .tier_of(&id)
            .map(|tier| tier.to_string())
            .unwrap_or_default();
        let base = ctx
            .store
            .base_path(&id)
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        println!(
            "{} {:<12} {:<8} {}",
            marker,
            style(&id).bold(),
            style(tier).dim(),
            base
        );
    }

    if !ctx.store.contains(current) {
        eprintln!("⚠️ Current root '{}' does not exist", current);
    }

    Ok(())
}
