// crates/ports/src/filesystem.rs
use std::{
    io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use file_lister_shared_kernel::{EntryMeta, Result};

/// One step of a directory-by-directory walk.
///
/// A walker emits `Directory` for a directory it is about to list, followed by one
/// `Entry` or `Unreadable` per child, before moving on to the next directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    Directory(PathBuf),
    Entry { path: PathBuf, name: String, meta: EntryMeta },
    /// The child exists but could not be stat'ed (dangling symlink, permissions).
    Unreadable { path: PathBuf, reason: String },
    /// The directory could not be opened; nothing below it is listed.
    DirectoryFailed { path: PathBuf, reason: String },
}

/// Port for depth-first traversal of a directory tree.
pub trait TreeWalker {
    /// Starts a walk at `root`.
    ///
    /// # Errors
    /// Only setup failures are returned here; problems below the root surface as
    /// [`WalkEvent::Unreadable`] or [`WalkEvent::DirectoryFailed`].
    fn walk(&self, root: &Path) -> Result<Box<dyn Iterator<Item = WalkEvent> + '_>>;
}

/// Port for the handful of path queries made before a walk starts.
pub trait PathInspector {
    /// Absolute path with symlinks resolved; fails when the path does not exist.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    fn modified(&self, path: &Path) -> io::Result<DateTime<Local>>;

    /// Succeeds when `path` can be opened as a directory.
    fn open_directory(&self, path: &Path) -> io::Result<()>;
}
