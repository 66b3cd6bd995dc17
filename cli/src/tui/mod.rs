pub mod app;
pub mod ui;

use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use habitgrid_core::{SummaryRepository, SummaryService};

use crate::tui::app::{App, Screen};

pub fn run<R: SummaryRepository>(service: SummaryService<R>) -> Result<()> {
    // App setup (fetches once before the terminal takes over)
    let mut app = App::new(service);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.screen {
                        Screen::Grid => match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            KeyCode::Left | KeyCode::Char('h') => app.select_previous_day(),
                            KeyCode::Right | KeyCode::Char('l') => app.select_next_day(),
                            KeyCode::Up | KeyCode::Char('k') => app.select_previous_week(),
                            KeyCode::Down | KeyCode::Char('j') => app.select_next_week(),
                            KeyCode::Char('g') => app.select_first_day(),
                            KeyCode::Char('G') => app.select_today(),
                            KeyCode::Char('r') => app.refresh(),
                            KeyCode::Enter | KeyCode::Char(' ') => app.open_selected_day(),
                            _ => {}
                        },
                        Screen::Day { .. } => match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                                app.back_to_grid()
                            }
                            KeyCode::Left | KeyCode::Char('h') => app.select_previous_day(),
                            KeyCode::Right | KeyCode::Char('l') => app.select_next_day(),
                            KeyCode::Char('r') => app.refresh(),
                            _ => {}
                        },
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
