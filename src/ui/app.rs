use tokio::sync::watch;

use crate::items::{FilterMode, Item, ItemKey};
use crate::list_store::ItemListStore;
use crate::ui::todo::TodoState;

/// Where key presses go.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Draft,
    Editing(ItemKey),
}

/// View-side state around the item list: focus, selection, quit flag.
///
/// All list changes go through the owned [`ItemListStore`]. The view learns
/// about them only through its subscription to that store (`take_changed`);
/// `view_position` covers what the store does not know about.
pub struct App {
    list: ItemListStore,
    updates: watch::Receiver<TodoState>,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new(list: ItemListStore) -> Self {
        let updates = list.subscribe();
        Self {
            list,
            updates,
            focus: Focus::List,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &TodoState {
        self.list.state()
    }

    pub fn list_mut(&mut self) -> &mut ItemListStore {
        &mut self.list
    }

    pub async fn load(&mut self) {
        self.list.load().await;
        self.clamp_selection();
    }

    /// Flush pending saves before exit.
    pub async fn shutdown(&self) {
        self.list.flush().await;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Index into the filtered view.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.state().filtered_view().get(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.state().filtered_view().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Keep the selection inside the filtered view after it shrank.
    pub fn clamp_selection(&mut self) {
        let len = self.state().filtered_view().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.list.set_filter(mode);
        self.clamp_selection();
    }

    /// Focus and selection, compared across a key press to decide whether
    /// the view itself moved.
    pub fn view_position(&self) -> (Focus, usize) {
        (self.focus, self.selected)
    }

    /// True if the list published a new state since the last call.
    pub fn take_changed(&mut self) -> bool {
        let changed = self.updates.has_changed().unwrap_or(false);
        if changed {
            let _ = self.updates.borrow_and_update();
        }
        changed
    }
}
