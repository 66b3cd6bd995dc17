pub mod summary_service;

// Re-export
pub use summary_service::{reconcile, SummaryService};
