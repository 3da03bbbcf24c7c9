// crates/goto-cli/src/main.rs - CLI Application Entry Point
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │  (clap flags)   │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │     goto-core       │
//                        │ (config + roots) │    │ (store, resolution) │
//                        └──────────────────┘    └─────────────────────┘
//
// stdout carries only command output (most importantly the resolved path);
// diagnostics and logs go to stderr.
//
// SHELL INTEGRATION:
// ```bash
// g() { local p; p="$(goto "$@")" && [ -d "$p" ] && cd "$p" || echo "$p"; }
// ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::Level;

mod cli;
mod commands;
mod context;
mod services;
mod stdin;

use cli::Cli;
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = Context::resolve_paths(cli.dir.clone())?;

    // Setup creates the config every other mode needs, so it runs first
    if cli.setup {
        return commands::setup::handle(&paths, cli.yes);
    }

    let mut ctx = Context::load(paths)?;

    if let Some(root) = cli.set.as_deref() {
        commands::current::handle(&mut ctx, root)
    } else if cli.print {
        commands::show::print(&ctx, cli.first.as_deref())
    } else if let Some(root) = cli.open.as_deref() {
        commands::edit::open(&ctx, root)
    } else if cli.all {
        commands::show::all(&ctx, cli.first.as_deref())
    } else if cli.roots {
        commands::show::roots(&ctx)
    } else if cli.config {
        commands::edit::config(&ctx)
    } else if let Some([identifier, name]) = cli.new.as_deref() {
        commands::edit::new(&ctx, identifier, name, cli.first.as_deref())
    } else if let Some(line) = cli.complete.as_deref() {
        commands::complete::handle(&ctx, line)
    } else if let Some(first) = cli.first.as_deref() {
        commands::jump::handle(
            &ctx,
            first,
            cli.second.as_deref(),
            cli.out_file.as_deref(),
        )
    } else {
        Cli::command().print_help()?;
        Ok(())
    }
}

/// Log to stderr so stdout stays clean for the resolved path
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
