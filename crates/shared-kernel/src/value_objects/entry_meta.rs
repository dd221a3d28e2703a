// crates/shared-kernel/src/value_objects/entry_meta.rs
use chrono::{DateTime, Local};

/// Coarse file type, as reported by the stat call that produced the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

/// Raw metadata captured for one entry of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub kind: EntryKind,
    pub size: u64,
    pub links: u64,
    pub uid: u32,
    pub gid: u32,
    /// Full `st_mode`; only the low nine permission bits are rendered.
    pub mode: u32,
    pub mtime: DateTime<Local>,
}
