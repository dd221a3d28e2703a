// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry_meta;

pub use entry_meta::{EntryKind, EntryMeta};
