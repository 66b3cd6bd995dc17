use anyhow::Result;
use chrono::NaiveDate;
use habitgrid_core::{today, DayCell, SummaryRepository, SummaryService};

const BAR_WIDTH: usize = 25;

pub fn run<R: SummaryRepository>(service: &SummaryService<R>, date: NaiveDate) -> Result<()> {
    let cell = service.day_cell(date, today())?;
    print!("{}", render(&cell));
    Ok(())
}

fn render(cell: &DayCell) -> String {
    let mut out = String::new();

    let marker = if cell.is_today { " (today)" } else { "" };
    out.push_str(&format!(
        "\x1b[1;36m{}\x1b[0m {}{}\n",
        cell.date.format("%A"),
        cell.date.format("%Y-%m-%d"),
        marker
    ));

    if cell.amount == 0 {
        out.push_str("No habits were scheduled on this day.\n");
        return out;
    }

    out.push_str(&format!(
        "{} of {} habits done ({}%)\n",
        cell.completed,
        cell.amount,
        cell.percentage()
    ));
    out.push_str(&format!(
        "[{}] {}\n",
        bar(cell.percentage()),
        cell.bucket.label()
    ));

    out
}

fn bar(percentage: u8) -> String {
    let filled = percentage as usize * BAR_WIDTH / 100;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(amount: u32, completed: u32) -> DayCell {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        DayCell::new(day, amount, completed, day)
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0), "░".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(50).matches('█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn detail_shows_the_counts() {
        let rendered = render(&cell(4, 2));
        assert!(rendered.contains("Tuesday"));
        assert!(rendered.contains("(today)"));
        assert!(rendered.contains("2 of 4 habits done (50%)"));
        assert!(rendered.contains("medium"));
    }

    #[test]
    fn day_without_habits_says_so() {
        let rendered = render(&cell(0, 0));
        assert!(rendered.contains("No habits were scheduled"));
        assert!(!rendered.contains("of 0 habits"));
    }
}
