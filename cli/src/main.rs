mod day;
mod grid;
mod list;
mod tui;

use clap::Parser;
use habitgrid_core::{Config, HttpSummaryRepository, SummaryService};
use anyhow::{Context, Result};
use chrono::NaiveDate;

#[derive(Parser)]
#[command(name = "habitgrid")]
#[command(about = "Year-at-a-glance habit tracking in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the year-to-date completion grid
    Grid,
    /// List every tracked day as a table, ascending by date
    List,
    /// Show one day in detail (usage: day 2024-01-02)
    Day {
        /// The day to inspect, as YYYY-MM-DD
        date: String,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let service = SummaryService::new(HttpSummaryRepository::new(config.api_url)?);

    match cli.command {
        Some(Commands::Grid) => grid::run(&service)?,
        Some(Commands::List) => list::run(&service)?,
        Some(Commands::Day { date }) => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("'{}' is not a YYYY-MM-DD date", date))?;
            day::run(&service, date)?;
        }
        Some(Commands::Tui) => tui::run(service)?,
        None => {
            // No subcommand opens the TUI, same as `habitgrid tui`.
            tui::run(service)?;
        }
    }
    Ok(())
}
