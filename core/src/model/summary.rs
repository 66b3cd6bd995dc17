use serde::{Deserialize, Serialize};
use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use uuid::Uuid;

/// One day's totals as the rest of the crate sees them, already pinned
/// to a local calendar day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: u32,
    pub completed: u32,
}

// Wire shape of GET /summary. Dates arrive as RFC 3339 datetimes and
// counts as plain integers; normalization happens once, at the edge.
#[derive(Deserialize, Debug, Clone)]
pub struct SummaryResponse {
    pub summary: Vec<SummaryRecord>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SummaryRecord {
    pub id: Uuid,
    pub date: DateTime<FixedOffset>,
    pub amount: i64,
    pub completed: i64,
}

impl SummaryRecord {
    /// Collapses the wire record onto the device's local calendar day
    /// and pins out-of-range counts to the nearest `u32` bound.
    pub fn into_entry(self) -> SummaryEntry {
        SummaryEntry {
            id: self.id,
            date: self.date.with_timezone(&Local).date_naive(),
            amount: u32::try_from(self.amount.max(0)).unwrap_or(u32::MAX),
            completed: u32::try_from(self.completed.max(0)).unwrap_or(u32::MAX),
        }
    }
}
