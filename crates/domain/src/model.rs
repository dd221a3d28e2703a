// crates/domain/src/model.rs
pub mod entry_record;
pub mod timestamp;
pub mod validation;

pub use entry_record::EntryRecord;
pub use timestamp::Timestamp;
pub use validation::{CANONICAL_LEN, TimestampError, validate};
