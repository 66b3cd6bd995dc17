use chrono::NaiveDate;
use habitgrid_core::{
    dates_from_year_beginning, reconcile, today, DayCell, SummaryRepository, SummaryService,
};

use crate::grid::DAYS_PER_WEEK;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Grid,
    Day { date: NaiveDate },
}

pub struct App<R: SummaryRepository> {
    service: SummaryService<R>,
    pub today: NaiveDate,
    pub cells: Vec<DayCell>,
    pub selected: usize,
    pub screen: Screen,
    pub notice: Option<String>,
}

impl<R: SummaryRepository> App<R> {
    pub fn new(service: SummaryService<R>) -> Self {
        let now = today();
        let dates = dates_from_year_beginning(now);
        // Placeholder grid first, so a slow or failing fetch still draws.
        let cells = reconcile(&dates, &[], now);
        let selected = cells.len().saturating_sub(1);

        let mut app = Self {
            service,
            today: now,
            cells,
            selected,
            screen: Screen::Grid,
            notice: None,
        };
        app.refresh();
        app
    }

    /// Refetches the summary and rebuilds the grid. The day range tracks
    /// the clock, so a session left open across midnight grows a cell on
    /// the next successful refresh. On failure the last grid stays up.
    pub fn refresh(&mut self) {
        let now = today();
        match self.service.load_grid(now) {
            Ok(cells) => {
                self.today = now;
                self.cells = cells;
                self.notice = None;
            }
            Err(err) => {
                log::warn!("summary fetch failed: {err:#}");
                self.notice = Some("Could not reach the habit API. Showing the last loaded data.".to_string());
            }
        }
        if self.selected >= self.cells.len() {
            self.selected = self.cells.len().saturating_sub(1);
        }
    }

    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.cells.get(self.selected)
    }

    pub fn select_previous_day(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.sync_day_screen();
    }

    pub fn select_next_day(&mut self) {
        if self.selected + 1 < self.cells.len() {
            self.selected += 1;
        }
        self.sync_day_screen();
    }

    pub fn select_previous_week(&mut self) {
        if self.selected >= DAYS_PER_WEEK {
            self.selected -= DAYS_PER_WEEK;
        }
    }

    pub fn select_next_week(&mut self) {
        if self.selected + DAYS_PER_WEEK < self.cells.len() {
            self.selected += DAYS_PER_WEEK;
        }
    }

    pub fn select_first_day(&mut self) {
        self.selected = 0;
    }

    pub fn select_today(&mut self) {
        self.selected = self.cells.len().saturating_sub(1);
    }

    pub fn open_selected_day(&mut self) {
        if let Some(cell) = self.selected_cell() {
            self.screen = Screen::Day { date: cell.date };
        }
    }

    /// Leaving the detail view counts as re-entering the grid, which
    /// refetches so edits made elsewhere show up right away.
    pub fn back_to_grid(&mut self) {
        self.screen = Screen::Grid;
        self.refresh();
    }

    fn sync_day_screen(&mut self) {
        if let Screen::Day { .. } = self.screen {
            if let Some(cell) = self.selected_cell() {
                self.screen = Screen::Day { date: cell.date };
            }
        }
    }
}
