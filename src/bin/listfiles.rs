// src/bin/listfiles.rs
use std::process::ExitCode;

use clap::Parser;
use file_lister::{app, cli::ListArgs};

fn main() -> ExitCode {
    let args = ListArgs::parse();
    app::run_list(&args)
}
