use anyhow::Result;
use chrono::Datelike;
use habitgrid_core::{today, Bucket, DayCell, SummaryRepository, SummaryService};

/// The grid never renders fewer than this many squares; early in the
/// year the tail is padded with placeholders so the shape holds.
pub const MIN_GRID_CELLS: usize = 90;

pub const DAYS_PER_WEEK: usize = 7;

const RESET: &str = "\x1b[0m";
const UNDERLINE: &str = "\x1b[4m";

pub fn run<R: SummaryRepository>(service: &SummaryService<R>) -> Result<()> {
    let cells = service.load_grid(today())?;
    print!("{}", render(&cells));
    Ok(())
}

pub fn filler_count(cell_count: usize) -> usize {
    MIN_GRID_CELLS.saturating_sub(cell_count)
}

pub fn bucket_ansi(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Empty => "\x1b[38;5;238m",
        Bucket::VeryLow => "\x1b[38;5;54m",
        Bucket::Low => "\x1b[38;5;55m",
        Bucket::Medium => "\x1b[38;5;93m",
        Bucket::High => "\x1b[38;5;135m",
        Bucket::Full => "\x1b[38;5;177m",
    }
}

fn render(cells: &[DayCell]) -> String {
    let mut out = String::new();

    if let Some(first) = cells.first() {
        out.push_str(&format!(
            "\x1b[1;36mHabits {}\x1b[0m ({} days tracked)\n\n",
            first.date.year(),
            cells.len()
        ));
    }

    for label in ["S", "M", "T", "W", "T", "F", "S"] {
        out.push_str(&format!("{:<3}", label));
    }
    out.push('\n');

    for (i, cell) in cells.iter().enumerate() {
        out.push_str(bucket_ansi(cell.bucket));
        if cell.is_today {
            out.push_str(UNDERLINE);
        }
        out.push_str("██");
        out.push_str(RESET);
        out.push(' ');
        if (i + 1) % DAYS_PER_WEEK == 0 {
            out.push('\n');
        }
    }

    for i in 0..filler_count(cells.len()) {
        out.push_str(bucket_ansi(Bucket::Empty));
        out.push_str("··");
        out.push_str(RESET);
        out.push(' ');
        if (cells.len() + i + 1) % DAYS_PER_WEEK == 0 {
            out.push('\n');
        }
    }
    if (cells.len() + filler_count(cells.len())) % DAYS_PER_WEEK != 0 {
        out.push('\n');
    }

    out.push('\n');
    out.push_str("less ");
    for bucket in [
        Bucket::Empty,
        Bucket::VeryLow,
        Bucket::Low,
        Bucket::Medium,
        Bucket::High,
        Bucket::Full,
    ] {
        out.push_str(bucket_ansi(bucket));
        out.push_str("██");
        out.push_str(RESET);
        out.push(' ');
    }
    out.push_str("more\n");

    out
}
