// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod permissions;

pub use model::{EntryRecord, Timestamp, TimestampError};
pub use permissions::permission_string;
