// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the walker and the identity
//! resolver stay free of conditional compilation.

use std::{
    fs::{FileType, Metadata},
    io,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Local, TimeZone};
use file_lister_shared_kernel::{EntryKind, EntryMeta};

// ============================================================================
// Entry Metadata
// ============================================================================

/// Owner, group, link count and mode bits as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub links: u64,
    pub uid: u32,
    pub gid: u32,
    pub mode: u32,
}

#[cfg(unix)]
pub fn ownership(metadata: &Metadata) -> Ownership {
    use std::os::unix::fs::MetadataExt;

    Ownership { links: metadata.nlink(), uid: metadata.uid(), gid: metadata.gid(), mode: metadata.mode() }
}

/// Without POSIX ownership, report root-owned entries with a mode derived from
/// the read-only flag.
#[cfg(not(unix))]
pub fn ownership(metadata: &Metadata) -> Ownership {
    let write = if metadata.permissions().readonly() { 0 } else { 0o200 };
    let exec = if metadata.is_dir() { 0o111 } else { 0 };
    Ownership { links: 1, uid: 0, gid: 0, mode: 0o444 | write | exec }
}

pub fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

// ============================================================================
// Modification Times
// ============================================================================

/// Converts a filesystem time to local time without panicking.
///
/// # Errors
/// `InvalidData` when the instant lies outside the range `chrono` can represent.
pub fn local_time(time: SystemTime) -> io::Result<DateTime<Local>> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok(), after.subsec_nanos()),
        Err(before) => {
            let before = before.duration();
            let secs = i64::try_from(before.as_secs()).ok().map(|s| -s);
            match before.subsec_nanos() {
                0 => (secs, 0),
                n => (secs.and_then(|s| s.checked_sub(1)), 1_000_000_000 - n),
            }
        }
    };
    secs
        .and_then(|secs| Local.timestamp_opt(secs, nanos).single())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "modification time out of range"))
}

/// Builds the port-level metadata record.
///
/// # Errors
/// Fails when the platform cannot report a modification time or the time is
/// out of range.
pub fn entry_meta(metadata: &Metadata) -> io::Result<EntryMeta> {
    let mtime = local_time(metadata.modified()?)?;
    let Ownership { links, uid, gid, mode } = ownership(metadata);
    Ok(EntryMeta { kind: entry_kind(metadata.file_type()), size: metadata.len(), links, uid, gid, mode, mtime })
}

#[cfg(test)]
mod tests {
    use std::{fs, time::Duration};

    use super::*;

    #[test]
    fn directory_metadata_maps_to_directory_kind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let meta = entry_meta(&fs::metadata(dir.path()).expect("stat")).expect("meta");
        assert_eq!(meta.kind, EntryKind::Directory);
    }

    #[test]
    fn file_metadata_carries_size_and_links() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.bin");
        fs::write(&path, [0u8; 37]).expect("write");
        let meta = entry_meta(&fs::metadata(&path).expect("stat")).expect("meta");
        assert_eq!(meta.kind, EntryKind::File);
        assert_eq!(meta.size, 37);
        assert_eq!(meta.links, 1);
    }

    #[test]
    fn local_time_keeps_sub_second_precision() {
        let at = UNIX_EPOCH + Duration::new(1_700_000_000, 250);
        let local = local_time(at).expect("in range");
        assert_eq!(local.timestamp(), 1_700_000_000);
        assert_eq!(local.timestamp_subsec_nanos(), 250);
    }

    #[test]
    fn local_time_handles_instants_before_the_epoch() {
        let at = UNIX_EPOCH - Duration::new(10, 250);
        let local = local_time(at).expect("in range");
        assert_eq!(local.timestamp(), -11);
        assert_eq!(local.timestamp_subsec_nanos(), 999_999_750);
    }

    #[test]
    fn local_time_rejects_instants_beyond_chrono_range() {
        let far = UNIX_EPOCH + Duration::from_secs(9_000_000_000_000);
        let err = local_time(far).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[cfg(unix)]
    #[test]
    fn unix_mode_includes_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("script.sh");
        fs::write(&path, "#!/bin/sh\n").expect("write");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o750)).expect("chmod");
        let owned = ownership(&fs::metadata(&path).expect("stat"));
        assert_eq!(owned.mode & 0o777, 0o750);
    }
}
