// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum, ValueHint};

const BACKUP_AFTER_HELP: &str = "\
THRESHOLD:
  -t accepts either a timestamp in the form YYYY-MM-DD hh:mm:ss or the path of
  a file whose last modification time becomes the cutoff. A value that is not
  a valid timestamp is always tried as a path. Without -t the cutoff is
  1970-01-01 00:00:00.

  Only entries modified strictly after the cutoff are listed.

EXAMPLES:
  backupfiles -t \"2024-01-31 18:00:00\" ~/projects
  backupfiles -t last-backup.stamp .";

/// Output layout for listed entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Long-listing lines grouped under directory headers
    #[default]
    Line,
    /// One JSON object per header or entry
    Jsonl,
}

/// Options shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Output layout
    #[arg(long, value_enum, default_value_t = OutputFormat::Line)]
    pub format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// List a directory tree, keeping only entries newer than a cutoff.
#[derive(Parser, Debug)]
#[command(name = "backupfiles", version = crate::VERSION, after_help = BACKUP_AFTER_HELP)]
pub struct BackupArgs {
    /// Cutoff: a YYYY-MM-DD hh:mm:ss timestamp or a reference file
    #[arg(short = 't', value_name = "TIME|FILE", allow_hyphen_values = true)]
    pub threshold: Option<String>,

    /// Directory to walk
    #[arg(value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// List every entry of a directory tree in long format.
#[derive(Parser, Debug)]
#[command(name = "listfiles", version = crate::VERSION)]
pub struct ListArgs {
    /// Directory to walk
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}
