use anyhow::Result;
use habitgrid_core::{today, DayCell, SummaryRepository, SummaryService};
use tabled::{Table, Tabled};
use tabled::settings::{Style, Color, Modify};
use tabled::settings::object::Rows;

// Helper struct for Table Row
#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Done")]
    done: String,
    #[tabled(rename = "Habits")]
    habits: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Level")]
    level: String,
}

pub fn run<R: SummaryRepository>(service: &SummaryService<R>) -> Result<()> {
    let cells = service.load_grid(today())?;
    show_days(&cells);
    Ok(())
}

pub fn show_days(cells: &[DayCell]) {
    let rows = rows(cells);
    if rows.is_empty() {
        println!("No habits recorded yet this year.");
        return;
    }

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    println!("{}", table);
}

// Only days that had habits scheduled, oldest first.
fn rows(cells: &[DayCell]) -> Vec<DayRow> {
    cells
        .iter()
        .filter(|cell| cell.amount > 0)
        .map(to_row)
        .collect()
}

fn to_row(cell: &DayCell) -> DayRow {
    let date = if cell.is_today {
        format!("{} (today)", cell.date.format("%Y-%m-%d"))
    } else {
        cell.date.format("%Y-%m-%d").to_string()
    };

    DayRow {
        date,
        day: cell.date.format("%a").to_string(),
        done: cell.completed.to_string(),
        habits: cell.amount.to_string(),
        progress: format!("{}%", cell.percentage()),
        level: cell.bucket.label().to_string(),
    }
}
