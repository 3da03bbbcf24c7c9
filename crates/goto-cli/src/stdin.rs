// crates/goto-cli/src/stdin.rs - Interactive confirmation
//
// Only --setup asks anything. The answer is read from stdin whether it is a
// terminal or a pipe, so `echo y | goto --setup` works; empty input or EOF
// counts as "no". The prompt is only shown on a terminal.

use anyhow::Result;
use std::io::{self, BufRead, IsTerminal, Write};

/// Ask a yes/no question; only a bare `y` confirms
pub fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        print!("{prompt} ");
        io::stdout().flush()?;
    }

    read_confirmation(stdin.lock())
}

/// First line of `input` is a confirmation when it is exactly `y`
fn read_confirmation(mut input: impl BufRead) -> Result<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim() == "y")
}
