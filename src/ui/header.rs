use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PLACEHOLDER_TEXT, STATUS_OK,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const PLACEHOLDER: &str = "What needs to be done?";

/// Toggle-all marker and new-item input.
pub struct Header<'a> {
    draft: &'a str,
    all_complete: bool,
    focused: bool,
}

impl<'a> Header<'a> {
    pub fn new(draft: &'a str, all_complete: bool, focused: bool) -> Self {
        Self {
            draft,
            all_complete,
            focused,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let marker = if self.all_complete {
            Span::styled(" ✔ ", Style::default().fg(STATUS_OK))
        } else {
            Span::styled(" ❯ ", text_style)
        };

        let input = if self.draft.is_empty() && !self.focused {
            Span::styled(PLACEHOLDER, Style::default().fg(PLACEHOLDER_TEXT))
        } else if self.focused {
            Span::styled(format!("{}▏", self.draft), text_style)
        } else {
            Span::styled(self.draft.to_string(), text_style)
        };

        let line = Line::from(vec![marker, Span::styled("│ ", separator_style), input]);
        let border = if self.focused { ACCENT } else { GLOBAL_BORDER };

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }
}
