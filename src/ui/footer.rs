use crate::trips::Region;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = "│ r: Reload │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Filter buttons, the active one highlighted, then key hints.
    pub fn widget(&self, area: Rect, active: Region) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let dim_style = text_style.add_modifier(Modifier::DIM);
        let active_style = Style::default()
            .fg(ACCENT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(" ", text_style)];
        let mut used = 1;
        for (idx, region) in Region::ALL.iter().enumerate() {
            let label = format!("[{}] {}", idx + 1, region.label());
            used += label.chars().count() + 1;
            let style = if *region == active {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::styled(" ", text_style));
        }
        spans.push(Span::styled(HINTS, dim_style));
        used += HINTS.chars().count();

        // Padding by char count, not byte count, because of the box-drawing separators
        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), dim_style));
        spans.push(Span::styled(version, dim_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
