use crate::ui::app::TripListView;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &TripListView<'_>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status, status_style) = if view.trips.is_pending {
            ("loading".to_string(), Style::default().fg(STATUS_PENDING))
        } else if view.trips.error.is_some() {
            ("error".to_string(), Style::default().fg(STATUS_ERROR))
        } else {
            let count = view.trips.visible_data().map_or(0, Vec::len);
            let noun = if count == 1 { "trip" } else { "trips" };
            (format!("{} {}", count, noun), text_style)
        };

        let line = Line::from(vec![
            Span::styled(
                "  Trip List",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(view.region.label(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
            Span::styled("  │  ", separator_style),
            Span::styled(view.url.to_string(), separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
