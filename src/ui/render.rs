use crate::trips::Trip;
use crate::ui::app::{App, TripListView};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PRICE_TEXT, STATUS_ERROR, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    draw_view(frame, &app.view());
}

pub fn draw_view(frame: &mut Frame<'_>, view: &TripListView<'_>) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(view), header);
    frame.render_widget(Clear, body);

    let lines = body_lines(view);
    // Keep the highlighted row on screen
    let visible = body.height as usize;
    let scroll = if visible == 0 {
        0
    } else {
        view.selected.saturating_sub(visible - 1)
    };
    let list = Paragraph::new(lines)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(list, body);

    frame.render_widget(Footer::new().widget(footer, view.region), footer);
}

/// Body content: loading indicator, error, or one row per trip.
pub fn body_lines(view: &TripListView<'_>) -> Vec<Line<'static>> {
    let state = view.trips;
    if state.is_pending {
        let frame = SPINNER[(view.tick % SPINNER.len() as u64) as usize];
        return vec![Line::from(Span::styled(
            format!(" {} Loading trips...", frame),
            Style::default().fg(STATUS_PENDING),
        ))];
    }

    if let Some(error) = &state.error {
        return vec![Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        ))];
    }

    match state.visible_data() {
        Some(trips) if trips.is_empty() => vec![Line::from(Span::styled(
            " No trips found.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))],
        Some(trips) => trip_rows(trips, view.selected),
        None => Vec::new(),
    }
}

fn trip_rows(trips: &[Trip], selected: usize) -> Vec<Line<'static>> {
    let title_width = trips
        .iter()
        .map(|trip| trip.title.chars().count())
        .max()
        .unwrap_or(0);

    trips
        .iter()
        .enumerate()
        .map(|(idx, trip)| {
            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("{:<width$}", trip.title, width = title_width),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(trip.display_price(), Style::default().fg(PRICE_TEXT)),
            ]);
            if idx == selected {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect()
}
