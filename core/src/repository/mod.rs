pub mod http;
pub mod traits;

// Re-export
pub use http::HttpSummaryRepository;
pub use traits::SummaryRepository;
