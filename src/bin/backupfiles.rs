// src/bin/backupfiles.rs
use std::process::ExitCode;

use clap::Parser;
use file_lister::{app, cli::BackupArgs};

fn main() -> ExitCode {
    let args = BackupArgs::parse();
    app::run_backup(&args)
}
