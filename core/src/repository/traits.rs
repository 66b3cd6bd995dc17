use crate::model::summary::SummaryEntry;
use anyhow::Result;

/// Source of the per-day habit totals shown on the grid.
pub trait SummaryRepository {
    fn fetch_summary(&self) -> Result<Vec<SummaryEntry>>;
}
