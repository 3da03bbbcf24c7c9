// crates/goto-cli/src/services/editor.rs - Editor Integration Service
//
// goto never edits records itself: opening a root or the config hands the
// file to the user's editor and waits for it to exit.

use anyhow::Result;
use std::env;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Launches the user's editor on a file
///
/// EDITOR SELECTION HIERARCHY:
/// 1. `editor` field of config.json
/// 2. GOTO_EDITOR environment variable (goto-specific)
/// 3. VISUAL environment variable
/// 4. EDITOR environment variable
/// 5. Platform default (vim on Unix, notepad on Windows)
pub struct EditorService;

impl EditorService {
    /// Editor command line to use, highest-priority source first
    pub fn get_editor_command(configured: Option<&str>) -> String {
        Self::select_editor(configured, |name| env::var(name).ok())
    }

    /// Editor selection over an arbitrary variable lookup
    ///
    /// Blank values are skipped, so an empty GOTO_EDITOR falls through to
    /// VISUAL and EDITOR.
    fn select_editor(configured: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> String {
        let non_blank = |command: &String| !command.trim().is_empty();

        configured
            .map(str::to_string)
            .filter(non_blank)
            .or_else(|| lookup("GOTO_EDITOR").filter(non_blank))
            .or_else(|| lookup("VISUAL").filter(non_blank))
            .or_else(|| lookup("EDITOR").filter(non_blank))
            .unwrap_or_else(|| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "vim".to_string()
                }
            })
    }

    /// Open `path` in the editor and wait for it to exit
    ///
    /// The editor command may carry its own arguments (`code --wait`); they
    /// are split on whitespace and placed before the file.
    pub fn open_file(path: &Path, configured: Option<&str>) -> Result<()> {
        let editor = Self::get_editor_command(configured);
        let mut parts = editor.split_whitespace();
        let program = parts.next().unwrap_or("vim");

        debug!("Launching editor '{}' on {}", editor, path.display());

        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|e| anyhow::anyhow!(
                "Failed to launch editor '{}': {}\n\nTips:\n- Check that '{}' is installed and in PATH\n- Set GOTO_EDITOR, VISUAL or EDITOR, or \"editor\" in config.json",
                editor, e, program
            ))?;

        if !status.success() {
            eprintln!(
                "⚠️ Editor '{}' exited with error code: {:?}",
                editor,
                status.code()
            );
        }

        Ok(())
    }
}
