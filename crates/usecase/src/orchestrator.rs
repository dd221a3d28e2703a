// crates/usecase/src/orchestrator.rs
use file_lister_domain::{EntryRecord, Timestamp, permission_string};
use file_lister_ports::{
    filesystem::{TreeWalker, WalkEvent},
    identity::IdentityResolver,
    listing::ListingSink,
};
use file_lister_shared_kernel::{EntryMeta, Result};
use log::{debug, warn};

use crate::{dto::ListingSummary, plan::ListingPlan};

/// Walks the plan's root and forwards every entry modified strictly after the
/// threshold to the sink, grouped under its directory header.
pub struct ListEntries<'a> {
    walker: &'a dyn TreeWalker,
    identities: &'a dyn IdentityResolver,
}

impl<'a> ListEntries<'a> {
    pub fn new(walker: &'a dyn TreeWalker, identities: &'a dyn IdentityResolver) -> Self {
        Self { walker, identities }
    }

    /// # Errors
    /// Fails when the walk cannot start or the sink rejects a write. Entries and
    /// directories that cannot be read are counted and skipped.
    pub fn run(&self, plan: &ListingPlan, sink: &mut dyn ListingSink) -> Result<ListingSummary> {
        let mut summary = ListingSummary::default();

        for event in self.walker.walk(&plan.root)? {
            match event {
                WalkEvent::Directory(path) => {
                    summary.directories += 1;
                    sink.directory(&path)?;
                }
                WalkEvent::Entry { path, name, meta } => match self.accept(plan.threshold, name, &meta) {
                    Ok(Some(record)) => {
                        sink.entry(&record)?;
                        summary.listed += 1;
                    }
                    Ok(None) => summary.skipped += 1,
                    Err(err) => {
                        debug!("skipping {}: {err}", path.display());
                        summary.unreadable += 1;
                    }
                },
                WalkEvent::Unreadable { path, reason } => {
                    debug!("skipping {}: {reason}", path.display());
                    summary.unreadable += 1;
                }
                WalkEvent::DirectoryFailed { path, reason } => {
                    warn!("cannot read directory {}: {reason}", path.display());
                    summary.failed_directories += 1;
                }
            }
        }

        sink.finish()?;
        Ok(summary)
    }

    fn accept(&self, threshold: Option<Timestamp>, name: String, meta: &EntryMeta) -> Result<Option<EntryRecord>> {
        let modified = Timestamp::from_datetime(&meta.mtime)?;
        if threshold.is_some_and(|t| !modified.is_after(&t)) {
            return Ok(None);
        }
        Ok(Some(EntryRecord {
            name,
            modified,
            links: meta.links,
            owner: self.identities.user_name(meta.uid),
            group: self.identities.group_name(meta.gid),
            permissions: permission_string(meta.kind, meta.mode),
            size: meta.size,
        }))
    }
}
