use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

/// Main CLI structure
///
/// Modes are mutually exclusive flags rather than subcommands so that the
/// common case stays short: `goto docs`, `goto proj docs`.
#[derive(Parser)]
#[command(name = "goto")]
#[command(about = "Jump between bookmarked directories")]
#[command(long_about = "
goto resolves a short shortcut name into a directory path.

Roots are named bookmark sets stored as JSON files under the goto directory:
a base path, a table of shortcuts relative to it, and a list of other roots
whose shortcuts it inherits. Records in local/roots/ override roots/.

Examples:
  goto -s proj            # make 'proj' the current root
  goto docs               # print the path of 'docs' in the current root
  goto proj docs          # print the path of 'docs' in 'proj'
  goto -a                 # list every shortcut available in the current root
  cd \"$(goto docs)\"       # typical shell integration
")]
#[command(version)]
#[command(group(ArgGroup::new("mode").multiple(false)))]
pub struct Cli {
    /// goto directory holding config.json and root records
    #[arg(long, global = true, env = "GOTO_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Set the current root
    #[arg(short, long, group = "mode", value_name = "ROOT")]
    pub set: Option<String>,

    /// Print information: all (default), configs, roots, or a root's record
    #[arg(short, long, group = "mode")]
    pub print: bool,

    /// Open the record file of a root in the editor
    #[arg(short, long, group = "mode", value_name = "ROOT")]
    pub open: Option<String>,

    /// Show every shortcut available in a root (default: current root)
    #[arg(short, long, group = "mode")]
    pub all: bool,

    /// List all roots with their tier and base path
    #[arg(short, long, group = "mode")]
    pub roots: bool,

    /// Open the config file in the editor
    #[arg(short, long, alias = "configs", group = "mode")]
    pub config: bool,

    /// Create a new root in the local tier; FIRST is used as its base path
    #[arg(short, long, group = "mode", num_args = 2, value_names = ["ID", "NAME"])]
    pub new: Option<Vec<String>>,

    /// Create the default config files and starter roots
    #[arg(long, group = "mode")]
    pub setup: bool,

    /// Skip the confirmation prompt of --setup
    #[arg(long, requires = "setup")]
    pub yes: bool,

    /// Print completion candidates for a command line
    #[arg(long, group = "mode", value_name = "LINE", allow_hyphen_values = true)]
    pub complete: Option<String>,

    /// Write the resolved path to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Shortcut, or root when SECOND is given
    pub first: Option<String>,

    /// Shortcut within the root named by FIRST
    pub second: Option<String>,
}
