// crates/goto-cli/src/commands/complete.rs - Shell Completion Command
//
// Shell glue passes the whole command line, e.g. from bash:
//
//   _goto() { COMPREPLY=($(goto --complete "${COMP_LINE}")); }
//   complete -F _goto goto
//
// Candidates are printed one per line.

use anyhow::Result;
use goto_core::candidates;

use crate::context::Context;

pub fn handle(ctx: &Context, line: &str) -> Result<()> {
    let words = split_line(line);
    let tokens: Vec<&str> = words.iter().skip(1).copied().collect();

    for candidate in candidates(&ctx.store, ctx.current_root(), &tokens) {
        println!("{}", candidate);
    }

    Ok(())
}

/// Split on whitespace; a trailing space starts a new, empty word
fn split_line(line: &str) -> Vec<&str> {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    if line.ends_with(char::is_whitespace) && !words.is_empty() {
        words.push("");
    }
    words
}
