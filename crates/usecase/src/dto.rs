// crates/usecase/src/dto.rs
/// Counters gathered over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    pub directories: usize,
    pub listed: usize,
    /// Entries that were not newer than the threshold.
    pub skipped: usize,
    pub unreadable: usize,
    pub failed_directories: usize,
}
