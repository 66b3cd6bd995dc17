pub mod day;
pub mod summary;

// Re-export
pub use day::DayCell;
pub use summary::{SummaryEntry, SummaryRecord, SummaryResponse};
