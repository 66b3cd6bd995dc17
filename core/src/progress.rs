/// Share of `amount` habits completed, rounded to a whole percent and
/// clamped to 0..=100. A day with no habits scheduled counts as 0.
pub fn completion_percentage(amount: u32, completed: u32) -> u8 {
    if amount == 0 {
        return 0;
    }
    let ratio = completed as f64 / amount as f64 * 100.0;
    (ratio.round() as u32).min(100) as u8
}

/// Fill level a day renders at on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Empty,
    VeryLow,
    Low,
    Medium,
    High,
    Full,
}

impl Bucket {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => Bucket::Empty,
            1..=19 => Bucket::VeryLow,
            20..=39 => Bucket::Low,
            40..=59 => Bucket::Medium,
            60..=79 => Bucket::High,
            _ => Bucket::Full,
        }
    }

    pub fn from_counts(amount: u32, completed: u32) -> Self {
        Self::from_percentage(completion_percentage(amount, completed))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Empty => "empty",
            Bucket::VeryLow => "very low",
            Bucket::Low => "low",
            Bucket::Medium => "medium",
            Bucket::High => "high",
            Bucket::Full => "full",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_zero_scheduled_is_zero() {
        assert_eq!(completion_percentage(0, 0), 0);
        assert_eq!(completion_percentage(0, 3), 0);
    }

    #[test]
    fn percentage_rounds_to_nearest_whole() {
        assert_eq!(completion_percentage(3, 1), 33);
        assert_eq!(completion_percentage(3, 2), 67);
        assert_eq!(completion_percentage(4, 2), 50);
        assert_eq!(completion_percentage(8, 7), 88);
    }

    #[test]
    fn percentage_never_exceeds_100() {
        assert_eq!(completion_percentage(2, 2), 100);
        assert_eq!(completion_percentage(2, 5), 100);
    }

    #[test]
    fn buckets_split_at_multiples_of_twenty() {
        assert_eq!(Bucket::from_percentage(0), Bucket::Empty);
        assert_eq!(Bucket::from_percentage(1), Bucket::VeryLow);
        assert_eq!(Bucket::from_percentage(19), Bucket::VeryLow);
        assert_eq!(Bucket::from_percentage(20), Bucket::Low);
        assert_eq!(Bucket::from_percentage(39), Bucket::Low);
        assert_eq!(Bucket::from_percentage(40), Bucket::Medium);
        assert_eq!(Bucket::from_percentage(50), Bucket::Medium);
        assert_eq!(Bucket::from_percentage(59), Bucket::Medium);
        assert_eq!(Bucket::from_percentage(60), Bucket::High);
        assert_eq!(Bucket::from_percentage(79), Bucket::High);
        assert_eq!(Bucket::from_percentage(80), Bucket::Full);
        assert_eq!(Bucket::from_percentage(100), Bucket::Full);
    }

    #[test]
    fn counts_feed_straight_into_a_bucket() {
        assert_eq!(Bucket::from_counts(0, 0), Bucket::Empty);
        assert_eq!(Bucket::from_counts(10, 0), Bucket::Empty);
        assert_eq!(Bucket::from_counts(4, 2), Bucket::Medium);
        assert_eq!(Bucket::from_counts(10, 5), Bucket::Medium);
        assert_eq!(Bucket::from_counts(10, 10), Bucket::Full);
    }

    #[test]
    fn every_percentage_lands_in_one_ordered_bucket() {
        let buckets: Vec<Bucket> = (0..=100).map(Bucket::from_percentage).collect();

        assert!(buckets.windows(2).all(|pair| pair[0] <= pair[1]));
        let count_of = |b: Bucket| buckets.iter().filter(|&&x| x == b).count();
        assert_eq!(count_of(Bucket::Empty), 1);
        assert_eq!(count_of(Bucket::VeryLow), 19);
        assert_eq!(count_of(Bucket::Low), 20);
        assert_eq!(count_of(Bucket::Medium), 20);
        assert_eq!(count_of(Bucket::High), 20);
        assert_eq!(count_of(Bucket::Full), 21);
    }
}
