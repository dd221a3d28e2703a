// crates/domain/src/permissions.rs
use file_lister_shared_kernel::EntryKind;

const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Ten character `ls -l` mode column, e.g. `drwxr-xr-x`.
#[must_use]
pub fn permission_string(kind: EntryKind, mode: u32) -> String {
    let mut s = String::with_capacity(10);
    s.push(match kind {
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        EntryKind::File | EntryKind::Other => '-',
    });
    for (bit, ch) in PERMISSION_BITS {
        s.push(if mode & bit != 0 { ch } else { '-' });
    }
    s
}
