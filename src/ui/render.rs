use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, loading_rect};
use crate::ui::row::row_line;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let (header, body, footer) = layout_regions(frame.area());

    let header_widget = Header::new(
        state.draft_text(),
        state.all_complete(),
        app.focus() == Focus::Draft,
    );
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let rows: Vec<ListItem<'static>> = state
        .filtered_view()
        .iter()
        .map(|item| ListItem::new(row_line(item)))
        .collect();
    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let selected = (!state.filtered_view().is_empty()).then_some(app.selected());
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, body, &mut list_state);

    let footer_widget = Footer::new(state.active_count(), state.filter());
    frame.render_widget(footer_widget.widget(footer), footer);

    if state.loading() {
        let popup = loading_rect(body);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(HEADER_TEXT))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(POPUP_BORDER)),
                ),
            popup,
        );
    }
}
