use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Gauge, Paragraph},
    Frame,
};
use habitgrid_core::{Bucket, SummaryRepository};

use crate::grid::{filler_count, DAYS_PER_WEEK};
use crate::tui::app::{App, Screen};

pub fn bucket_color(bucket: Bucket) -> Color {
    match bucket {
        Bucket::Empty => Color::Indexed(238),
        Bucket::VeryLow => Color::Indexed(54),
        Bucket::Low => Color::Indexed(55),
        Bucket::Medium => Color::Indexed(93),
        Bucket::High => Color::Indexed(135),
        Bucket::Full => Color::Indexed(177),
    }
}

pub fn draw<R: SummaryRepository>(f: &mut Frame, app: &App<R>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let title = match app.screen {
        Screen::Grid => format!("HABITGRID {}", app.today.format("%Y")),
        Screen::Day { date } => format!("HABITGRID {}", date.format("%Y-%m-%d")),
    };
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    match app.screen {
        Screen::Grid => draw_grid(f, app, main_chunks[1]),
        Screen::Day { .. } => draw_day(f, app, main_chunks[1]),
    }

    // Notice
    if let Some(notice) = &app.notice {
        let warning = Paragraph::new(notice.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(warning, main_chunks[2]);
    }

    // Footer
    let help = match app.screen {
        Screen::Grid => "h/j/k/l: Move | enter: Open day | r: Refresh | g/G: Jan 1 / Today | q: Quit",
        Screen::Day { .. } => "h/l: Previous / Next day | esc: Back | r: Refresh | q: Quit",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_grid<R: SummaryRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Weekday labels
            Constraint::Min(1),    // Cells
        ])
        .split(area);

    // One leading space lines the labels up with the bordered grid below.
    let mut labels = String::from(" ");
    for label in ["S", "M", "T", "W", "T", "F", "S"] {
        labels.push_str(&format!("{:<3}", label));
    }
    let weekdays = Paragraph::new(labels).style(Style::default().fg(Color::DarkGray));
    f.render_widget(weekdays, chunks[0]);

    let slot_count = app.cells.len() + filler_count(app.cells.len());
    let mut lines: Vec<Line> = Vec::new();
    let mut row: Vec<Span> = Vec::new();
    for i in 0..slot_count {
        let span = match app.cells.get(i) {
            Some(cell) => {
                let mut style = Style::default().fg(bucket_color(cell.bucket));
                if cell.is_today {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                if i == app.selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Span::styled("██ ", style)
            }
            None => Span::styled("·· ", Style::default().fg(bucket_color(Bucket::Empty))),
        };
        row.push(span);
        if row.len() == DAYS_PER_WEEK {
            lines.push(Line::from(std::mem::take(&mut row)));
        }
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }

    // Keep the selected row inside the viewport.
    let inner_height = chunks[1].height.saturating_sub(2);
    let selected_row = (app.selected / DAYS_PER_WEEK) as u16;
    let scroll_y = (selected_row + 1).saturating_sub(inner_height);

    let grid = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Year to date ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((scroll_y, 0));
    f.render_widget(grid, chunks[1]);
}

fn draw_day<R: SummaryRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    if let Some(cell) = app.selected_cell() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Counts
                Constraint::Length(3), // Gauge
                Constraint::Min(0),
            ])
            .split(area);

        let marker = if cell.is_today { "  (today)" } else { "" };
        let mut info_text = vec![
            Line::from(vec![
                Span::styled(
                    cell.date.format("%A, %B %e").to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(marker, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(""),
        ];
        if cell.amount == 0 {
            info_text.push(Line::from("No habits were scheduled on this day."));
        } else {
            info_text.push(Line::from(vec![
                Span::styled("Done:  ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{} of {}", cell.completed, cell.amount)),
            ]));
            info_text.push(Line::from(vec![
                Span::styled("Level: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    cell.bucket.label(),
                    Style::default().fg(bucket_color(cell.bucket)),
                ),
            ]));
        }

        let info = Paragraph::new(info_text).block(
            Block::default()
                .title(" Day ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(info, chunks[0]);

        let percentage = cell.percentage();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(" Completion ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .gauge_style(Style::default().fg(bucket_color(cell.bucket)))
            .ratio(f64::from(percentage) / 100.0)
            .label(format!("{}%", percentage));
        f.render_widget(gauge, chunks[1]);
    } else {
        f.render_widget(
            Paragraph::new("No data for this day").alignment(Alignment::Center),
            area,
        );
    }
}
