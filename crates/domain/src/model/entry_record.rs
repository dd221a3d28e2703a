// crates/domain/src/model/entry_record.rs
use std::fmt;

use serde::Serialize;

use super::Timestamp;

/// One accepted entry, with ids already resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub name: String,
    pub modified: Timestamp,
    pub links: u64,
    pub owner: String,
    pub group: String,
    pub permissions: String,
    pub size: u64,
}

impl EntryRecord {
    /// `Mon DD  hh:mm` rendering of [`EntryRecord::modified`].
    #[must_use]
    pub fn display_time(&self) -> String {
        self.modified.display_time()
    }
}

/// `<permissions> <links> <owner> <group> <size> <time> <name>` with the
/// widths of a long listing: links 2, group 10, size 8, time 12.
impl fmt::Display for EntryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>2} {} {:>10} {:>8} {:>12} {}",
            self.permissions,
            self.links,
            self.owner,
            self.group,
            self.size,
            self.display_time(),
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EntryRecord {
        EntryRecord {
            name: "notes.txt".into(),
            modified: Timestamp::parse("2024-03-05 07:09:41").expect("timestamp"),
            links: 1,
            owner: "alice".into(),
            group: "staff".into(),
            permissions: "-rw-r--r--".into(),
            size: 512,
        }
    }

    #[test]
    fn long_line_pads_columns() {
        assert_eq!(
            record().to_string(),
            "-rw-r--r--  1 alice      staff      512 Mar  5  07:09 notes.txt"
        );
    }

    #[test]
    fn wide_values_are_not_truncated() {
        let mut r = record();
        r.links = 123;
        r.group = "engineering-team".into();
        r.size = 1_234_567_890;
        assert_eq!(
            r.to_string(),
            "-rw-r--r-- 123 alice engineering-team 1234567890 Mar  5  07:09 notes.txt"
        );
    }

    #[test]
    fn serializes_modified_in_canonical_form() {
        let json = serde_json::to_value(record()).expect("serialize");
        assert_eq!(json["modified"], "2024-03-05 07:09:41");
        assert_eq!(json["size"], 512);
    }
}
