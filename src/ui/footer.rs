use crate::items::FilterMode;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remaining count, filter tabs, key hints.
pub struct Footer {
    active_count: usize,
    filter: FilterMode,
}

impl Footer {
    pub fn new(active_count: usize, filter: FilterMode) -> Self {
        Self {
            active_count,
            filter,
        }
    }

    pub fn count_label(&self) -> String {
        let noun = if self.active_count == 1 { "item" } else { "items" };
        format!(" {} {} left", self.active_count, noun)
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let dim_style = text_style.add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let selected_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(self.count_label(), text_style),
            Span::styled("  │ ", separator_style),
        ];
        for mode in FilterMode::all() {
            let style = if *mode == self.filter {
                selected_style
            } else {
                dim_style
            };
            spans.push(Span::styled(format!("{} ", mode.label()), style));
        }
        spans.push(Span::styled("│ c: Clear completed", dim_style));

        let version = format!("v{} ", VERSION);
        // Pad by char count, not bytes
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
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
