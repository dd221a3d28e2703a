// crates/ports/src/listing.rs
use std::path::Path;

use file_lister_domain::EntryRecord;
use file_lister_shared_kernel::Result;

pub trait ListingSink {
    fn directory(&mut self, path: &Path) -> Result<()>;
    fn entry(&mut self, record: &EntryRecord) -> Result<()>;

    /// Flushes buffered output once the walk is over.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
