pub mod calendar;
pub mod config;
pub mod model;
pub mod progress;
pub mod repository;
pub mod service;

pub use calendar::{dates_from_year_beginning, today};
pub use config::Config;
pub use model::day::DayCell;
pub use model::summary::{SummaryEntry, SummaryRecord, SummaryResponse};
pub use progress::{completion_percentage, Bucket};
pub use repository::{HttpSummaryRepository, SummaryRepository};
pub use service::summary_service::{reconcile, SummaryService};
