// src/app.rs
use std::{path::Path, process::ExitCode};

use anyhow::Result;
use file_lister_infra::{IgnoreTreeWalker, LocalPathInspector, SystemIdentityResolver, filesystem::WalkOptions};
use file_lister_shared_kernel::ErrorContext;
use file_lister_usecase::{ListEntries, ListingPlan, ListingSummary, ThresholdResolver};
use log::{debug, info};

use crate::{
    cli::{BackupArgs, ListArgs, OutputFormat},
    logging,
    presentation::WriterSink,
};

/// Which entries survive the walk.
#[derive(Debug, Clone, Copy)]
enum Cutoff<'a> {
    /// `listfiles`: no threshold at all.
    Everything,
    /// `backupfiles`: the raw `-t` value, if any.
    Threshold(Option<&'a str>),
}

pub fn run_backup(args: &BackupArgs) -> ExitCode {
    logging::init(args.common.verbose);
    report(execute(&args.directory, Cutoff::Threshold(args.threshold.as_deref()), args.common.format))
}

pub fn run_list(args: &ListArgs) -> ExitCode {
    logging::init(args.common.verbose);
    report(execute(&args.directory, Cutoff::Everything, args.common.format))
}

fn execute(directory: &Path, cutoff: Cutoff<'_>, format: OutputFormat) -> Result<ListingSummary> {
    let inspector = LocalPathInspector;
    let resolver = ThresholdResolver::new(&inspector);

    // the threshold is settled before the directory is looked at
    let threshold = match cutoff {
        Cutoff::Everything => None,
        Cutoff::Threshold(value) => {
            let resolved = resolver.resolve(value)?;
            debug!("threshold {} ({:?})", resolved.timestamp, resolved.source);
            Some(resolved.timestamp)
        }
    };
    let root = resolver.resolve_root(directory)?;
    let plan = ListingPlan::builder().root(root).threshold(threshold).finish()?;

    let walker = IgnoreTreeWalker::new(WalkOptions::default());
    let identities = SystemIdentityResolver::new();
    let mut sink = WriterSink::stdout(format);
    let summary = ListEntries::new(&walker, &identities)
        .run(&plan, &mut sink)
        .with_context(|| format!("listing '{}'", plan.root.display()))?;

    info!(
        "{} directories, {} listed, {} skipped, {} unreadable, {} directories failed",
        summary.directories, summary.listed, summary.skipped, summary.unreadable, summary.failed_directories
    );
    Ok(summary)
}

fn report(result: Result<ListingSummary>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
