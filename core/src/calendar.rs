use chrono::{Datelike, Duration, Local, NaiveDate};

/// Calendar day the grid ends on, in the device's local zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Every calendar day from January 1 of `today`'s year through `today`,
/// ascending. January 1 yields a single-element sequence.
pub fn dates_from_year_beginning(today: NaiveDate) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
    let mut dates = Vec::with_capacity(today.ordinal() as usize);
    let mut current = start;
    while current <= today {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_starts_jan_1_and_ends_on_the_reference_day() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let dates = dates_from_year_beginning(reference);
        assert_eq!(
            dates.first().copied(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(dates.last().copied(), Some(reference));
        assert_eq!(dates.len(), reference.ordinal() as usize);
    }

    #[test]
    fn range_ascends_one_day_at_a_time() {
        let dates = dates_from_year_beginning(NaiveDate::from_ymd_opt(2023, 2, 10).unwrap());
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn january_first_yields_a_single_day() {
        let jan1 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(dates_from_year_beginning(jan1), vec![jan1]);
    }

    #[test]
    fn leap_year_runs_to_366_days() {
        let dec31 = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let dates = dates_from_year_beginning(dec31);
        assert_eq!(dates.len(), 366);
        assert!(dates.contains(&NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }
}
