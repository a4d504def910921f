use crate::items::{self, FilterMode, Item, ItemKey};
use crate::ui::mvi::UiState;

/// Everything the list view renders.
///
/// `filtered_view`, `all_complete` and `active_count` are derived from
/// `items` and `filter` and recomputed after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoState {
    pub(super) items: Vec<Item>,
    pub(super) filter: FilterMode,
    pub(super) loading: bool,
    pub(super) draft_text: String,
    filtered_view: Vec<Item>,
    all_complete: bool,
    active_count: usize,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: FilterMode::default(),
            loading: true,
            draft_text: String::new(),
            filtered_view: Vec::new(),
            all_complete: false,
            active_count: 0,
        }
    }
}

impl UiState for TodoState {}

impl TodoState {
    /// Loaded state holding `items`, filtered by `filter`.
    pub fn with_items(items: Vec<Item>, filter: FilterMode) -> Self {
        Self {
            items,
            filter,
            loading: false,
            ..Self::default()
        }
        .refresh()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn filtered_view(&self) -> &[Item] {
        &self.filtered_view
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// True when there is at least one item and every item is complete.
    pub fn all_complete(&self) -> bool {
        self.all_complete
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn item(&self, key: ItemKey) -> Option<&Item> {
        self.items.iter().find(|item| item.key == key)
    }

    pub(super) fn item_mut(&mut self, key: ItemKey) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.key == key)
    }

    pub(super) fn refresh(mut self) -> Self {
        self.filtered_view = items::apply(self.filter, &self.items);
        self.active_count = items::count(FilterMode::Active, &self.items);
        self.all_complete = !self.items.is_empty() && self.active_count == 0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_loading_and_empty() {
        let state = TodoState::default();
        assert!(state.loading());
        assert!(state.items().is_empty());
        assert_eq!(state.filter(), FilterMode::All);
        assert!(!state.all_complete());
    }

    #[test]
    fn with_items_derives_view_and_counters() {
        let mut done = Item::new(ItemKey(2), "done");
        done.complete = true;
        let state =
            TodoState::with_items(vec![Item::new(ItemKey(1), "open"), done], FilterMode::Completed);

        assert!(!state.loading());
        assert_eq!(state.filtered_view().len(), 1);
        assert_eq!(state.filtered_view()[0].key, ItemKey(2));
        assert_eq!(state.active_count(), 1);
        assert!(!state.all_complete());
    }
}
