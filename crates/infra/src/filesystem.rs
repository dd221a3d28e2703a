// crates/infra/src/filesystem.rs
use std::{
    ffi::OsString,
    fs,
    io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use file_lister_ports::filesystem::{PathInspector, TreeWalker, WalkEvent};
use file_lister_shared_kernel::Result;
use ignore::{DirEntry, WalkBuilder};
use log::debug;

use crate::platform;

/// Walker knobs. The defaults reproduce a plain physical walk: every file is
/// visited, symlinks are not followed, siblings come in name order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    pub sort_by_name: bool,
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self { sort_by_name: true, follow_links: false }
    }
}

/// Filesystem adapter implementing the `TreeWalker` port on top of `ignore`.
///
/// `ignore` drives the directory recursion; each directory it yields is then
/// listed with `read_dir` so the listing can be emitted right after its header.
#[derive(Debug, Default)]
pub struct IgnoreTreeWalker {
    options: WalkOptions,
}

impl IgnoreTreeWalker {
    pub fn new(options: WalkOptions) -> Self {
        Self { options }
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        // no .gitignore, hidden-file or parent filtering: every entry counts
        builder.standard_filters(false);
        builder.follow_links(self.options.follow_links);
        if self.options.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        builder
    }

    fn directory_events(&self, result: std::result::Result<DirEntry, ignore::Error>) -> Vec<WalkEvent> {
        match result {
            Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_dir()) => {
                list_directory(entry.path(), self.options.sort_by_name)
            }
            Ok(_) => Vec::new(),
            // the directory itself was already yielded and failed in list_directory
            Err(err) => {
                debug!("walk error: {err}");
                Vec::new()
            }
        }
    }
}

impl TreeWalker for IgnoreTreeWalker {
    fn walk(&self, root: &Path) -> Result<Box<dyn Iterator<Item = WalkEvent> + '_>> {
        let walk = self.builder(root).build();
        Ok(Box::new(walk.flat_map(move |result| self.directory_events(result))))
    }
}

/// Header plus one event per child of `dir`, or a single `DirectoryFailed`.
fn list_directory(dir: &Path, sort_by_name: bool) -> Vec<WalkEvent> {
    let mut names = match read_children(dir) {
        Ok(names) => names,
        Err(err) => {
            return vec![WalkEvent::DirectoryFailed { path: dir.to_path_buf(), reason: err.to_string() }];
        }
    };
    if sort_by_name {
        names.sort();
    }

    let mut events = Vec::with_capacity(names.len() + 1);
    events.push(WalkEvent::Directory(dir.to_path_buf()));
    events.extend(names.into_iter().map(|name| stat_child(dir, name)));
    events
}

fn read_children(dir: &Path) -> io::Result<Vec<OsString>> {
    fs::read_dir(dir)?.map(|entry| entry.map(|e| e.file_name())).collect()
}

// stat(2) semantics: symlinks are resolved, so a dangling one is unreadable.
// The raw name builds the path; only the displayed name is lossy.
fn stat_child(dir: &Path, name: OsString) -> WalkEvent {
    let path = dir.join(&name);
    match fs::metadata(&path).and_then(|md| platform::entry_meta(&md)) {
        Ok(meta) => WalkEvent::Entry { name: name.to_string_lossy().into_owned(), path, meta },
        Err(err) => WalkEvent::Unreadable { path, reason: err.to_string() },
    }
}

/// `PathInspector` backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPathInspector;

impl PathInspector for LocalPathInspector {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn modified(&self, path: &Path) -> io::Result<DateTime<Local>> {
        platform::local_time(fs::metadata(path)?.modified()?)
    }

    fn open_directory(&self, path: &Path) -> io::Result<()> {
        fs::read_dir(path).map(|_| ())
    }
}
