use chrono::NaiveDate;

use crate::progress::{completion_percentage, Bucket};

/// One square of the year grid, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub amount: u32,
    pub completed: u32,
    pub bucket: Bucket,
    pub is_today: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate, amount: u32, completed: u32, today: NaiveDate) -> Self {
        Self {
            date,
            amount,
            completed,
            bucket: Bucket::from_counts(amount, completed),
            is_today: date == today,
        }
    }

    pub fn percentage(&self) -> u8 {
        completion_percentage(self.amount, self.completed)
    }
}
