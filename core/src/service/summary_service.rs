use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;

use crate::calendar::dates_from_year_beginning;
use crate::model::day::DayCell;
use crate::model::summary::SummaryEntry;
use crate::repository::SummaryRepository;

/// Merges the fetched totals onto a run of calendar days. Dates with no
/// entry come out as empty cells; when the backend repeats a date, the
/// first entry wins.
pub fn reconcile(dates: &[NaiveDate], entries: &[SummaryEntry], today: NaiveDate) -> Vec<DayCell> {
    let mut by_date: HashMap<NaiveDate, &SummaryEntry> = HashMap::new();
    for entry in entries {
        by_date.entry(entry.date).or_insert(entry);
    }

    dates
        .iter()
        .map(|&date| match by_date.get(&date) {
            Some(entry) => DayCell::new(date, entry.amount, entry.completed, today),
            None => DayCell::new(date, 0, 0, today),
        })
        .collect()
}

pub struct SummaryService<R: SummaryRepository> {
    repo: R,
}

impl<R: SummaryRepository> SummaryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn fetch_entries(&self) -> Result<Vec<SummaryEntry>> {
        self.repo.fetch_summary()
    }

    /// Fetches the summary and reconciles it over the year to date,
    /// one cell per day from January 1 through `today`.
    pub fn load_grid(&self, today: NaiveDate) -> Result<Vec<DayCell>> {
        let dates = dates_from_year_beginning(today);
        let entries = self.fetch_entries()?;
        Ok(reconcile(&dates, &entries, today))
    }

    pub fn day_cell(&self, date: NaiveDate, today: NaiveDate) -> Result<DayCell> {
        let entries = self.fetch_entries()?;
        Ok(reconcile(&[date], &entries, today)[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Bucket;
    use anyhow::anyhow;
    use uuid::Uuid;

    struct MockSummaryRepo {
        entries: Vec<SummaryEntry>,
    }

    impl SummaryRepository for MockSummaryRepo {
        fn fetch_summary(&self) -> Result<Vec<SummaryEntry>> {
            Ok(self.entries.clone())
        }
    }

    struct FailingSummaryRepo;
    impl SummaryRepository for FailingSummaryRepo {
        fn fetch_summary(&self) -> Result<Vec<SummaryEntry>> {
            Err(anyhow!("backend unreachable"))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(on: NaiveDate, amount: u32, completed: u32) -> SummaryEntry {
        SummaryEntry {
            id: Uuid::new_v4(),
            date: on,
            amount,
            completed,
        }
    }

    #[test]
    fn every_date_gets_a_cell_in_the_same_order() {
        let dates: Vec<_> = (1..=5).map(|d| date(2024, 3, d)).collect();
        let cells = reconcile(&dates, &[], date(2024, 3, 5));
        assert_eq!(cells.len(), 5);
        for (cell, expected) in cells.iter().zip(&dates) {
            assert_eq!(cell.date, *expected);
            assert_eq!(cell.bucket, Bucket::Empty);
        }
    }

    #[test]
    fn entry_counts_land_on_their_day() {
        let dates = vec![date(2024, 1, 1), date(2024, 1, 2)];
        let entries = vec![entry(date(2024, 1, 2), 4, 2)];

        let cells = reconcile(&dates, &entries, date(2024, 1, 2));
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].amount, 0);
        assert_eq!(cells[0].completed, 0);
        assert_eq!(cells[0].bucket, Bucket::Empty);
        assert_eq!(cells[1].amount, 4);
        assert_eq!(cells[1].completed, 2);
        assert_eq!(cells[1].bucket, Bucket::Medium);
    }

    #[test]
    fn first_entry_wins_when_a_date_repeats() {
        let day = date(2024, 6, 1);
        let entries = vec![entry(day, 3, 3), entry(day, 10, 0)];

        let cells = reconcile(&[day], &entries, day);
        assert_eq!(cells[0].amount, 3);
        assert_eq!(cells[0].completed, 3);
        assert_eq!(cells[0].bucket, Bucket::Full);
    }

    #[test]
    fn only_the_reference_day_is_marked_today() {
        let dates: Vec<_> = (1..=3).map(|d| date(2024, 2, d)).collect();
        let cells = reconcile(&dates, &[], date(2024, 2, 2));
        assert!(!cells[0].is_today);
        assert!(cells[1].is_today);
        assert!(!cells[2].is_today);
    }

    #[test]
    fn entries_outside_the_range_are_ignored() {
        let dates = vec![date(2024, 1, 1)];
        let entries = vec![entry(date(2023, 12, 31), 5, 5)];
        let cells = reconcile(&dates, &entries, date(2024, 1, 1));
        assert_eq!(cells[0].bucket, Bucket::Empty);
    }

    #[test]
    fn service_loads_the_year_to_date_grid() {
        let day = date(2024, 4, 10);
        let repo = MockSummaryRepo {
            entries: vec![entry(day, 5, 5)],
        };
        let service = SummaryService::new(repo);

        let cells = service.load_grid(day).unwrap();
        assert_eq!(cells.len(), 101); // Jan 1 through Apr 10 of a leap year
        assert_eq!(cells[0].date, date(2024, 1, 1));

        let last = cells.last().unwrap();
        assert_eq!(last.date, day);
        assert_eq!(last.bucket, Bucket::Full);
        assert!(last.is_today);
    }

    #[test]
    fn repository_failure_bubbles_up() {
        let service = SummaryService::new(FailingSummaryRepo);
        assert!(service.load_grid(date(2024, 1, 1)).is_err());
        assert!(service.day_cell(date(2024, 1, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn day_cell_reads_a_single_date() {
        let day = date(2024, 4, 10);
        let repo = MockSummaryRepo {
            entries: vec![entry(day, 2, 1)],
        };
        let service = SummaryService::new(repo);

        let cell = service.day_cell(day, date(2024, 4, 11)).unwrap();
        assert_eq!(cell.percentage(), 50);
        assert!(!cell.is_today);
    }
}
