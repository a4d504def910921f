use crate::items::{FilterMode, ItemKey};
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::List => handle_list_key(app, key),
        Focus::Draft => handle_draft_key(app, key),
        Focus::Editing(item) => handle_edit_key(app, item, key),
    }
    app.clamp_selection();
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('a') | KeyCode::Char('i') => app.set_focus(Focus::Draft),
        KeyCode::Char(' ') => {
            if let Some((item, complete)) = app.selected_item().map(|i| (i.key, i.complete)) {
                app.list_mut().toggle_complete(item, !complete);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(item) = app.selected_item().map(|i| i.key) {
                app.list_mut().toggle_editing(item, true);
                app.set_focus(Focus::Editing(item));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(item) = app.selected_item().map(|i| i.key) {
                app.list_mut().remove_item(item);
            }
        }
        KeyCode::Char('t') => app.list_mut().toggle_all_complete(),
        KeyCode::Char('c') => app.list_mut().clear_completed(),
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Active),
        KeyCode::Char('3') => app.set_filter(FilterMode::Completed),
        KeyCode::Char('f') => {
            let next = app.state().filter().next();
            app.set_filter(next);
        }
        _ => {}
    }
}

fn handle_draft_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::List),
        KeyCode::Enter => {
            let draft = app.state().draft_text().to_string();
            app.list_mut().add_item(&draft);
        }
        KeyCode::Backspace => {
            let mut draft = app.state().draft_text().to_string();
            draft.pop();
            app.list_mut().set_draft(&draft);
        }
        KeyCode::Char(c) if is_text_input(key) => {
            let mut draft = app.state().draft_text().to_string();
            draft.push(c);
            app.list_mut().set_draft(&draft);
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, item: ItemKey, key: KeyEvent) {
    let Some(current) = app.state().item(item).map(|i| i.text.clone()) else {
        app.set_focus(Focus::List);
        return;
    };

    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.list_mut().toggle_editing(item, false);
            app.set_focus(Focus::List);
        }
        KeyCode::Backspace => {
            let mut text = current;
            text.pop();
            app.list_mut().update_text(item, &text);
        }
        KeyCode::Char(c) if is_text_input(key) => {
            let mut text = current;
            text.push(c);
            app.list_mut().update_text(item, &text);
        }
        _ => {}
    }
}

fn is_text_input(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
