use crate::items::Item;
use crate::ui::theme::{COMPLETED_TEXT, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// One list row: checkbox and text, or an edit cursor while editing.
pub fn row_line(item: &Item) -> Line<'static> {
    let checkbox = if item.complete {
        Span::styled(" [✔] ", Style::default().fg(STATUS_OK))
    } else {
        Span::styled(" [ ] ", Style::default().fg(HEADER_TEXT))
    };

    let text = if item.editing {
        Span::styled(
            format!("{}▏", item.text),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::UNDERLINED),
        )
    } else if item.complete {
        Span::styled(
            item.text.clone(),
            Style::default()
                .fg(COMPLETED_TEXT)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        Span::styled(item.text.clone(), Style::default().fg(HEADER_TEXT))
    };

    Line::from(vec![checkbox, text])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKey;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn active_row_has_empty_checkbox() {
        let item = Item::new(ItemKey(1), "Buy milk");
        assert_eq!(plain(&row_line(&item)), " [ ] Buy milk");
    }

    #[test]
    fn editing_row_shows_cursor() {
        let mut item = Item::new(ItemKey(1), "Buy");
        item.editing = true;
        assert_eq!(plain(&row_line(&item)), " [ ] Buy▏");
    }
}
