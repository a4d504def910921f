use crate::items::{self, FilterMode, Item};
use crate::ui::mvi::Reducer;
use crate::ui::todo::intent::TodoIntent;
use crate::ui::todo::state::TodoState;

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Intent = TodoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            TodoIntent::Loaded { items } => {
                state.items = items;
                state.loading = false;
            }
            TodoIntent::LoadFailed => {
                state.loading = false;
            }
            TodoIntent::Add { key, text } => {
                if text.trim().is_empty() || state.item(key).is_some() {
                    return state;
                }
                state.items.push(Item::new(key, text));
                state.draft_text.clear();
            }
            TodoIntent::Remove { key } => {
                state.items.retain(|item| item.key != key);
            }
            TodoIntent::UpdateText { key, text } => {
                if let Some(item) = state.item_mut(key) {
                    item.text = text;
                }
            }
            TodoIntent::SetEditing { key, editing } => {
                if let Some(item) = state.item_mut(key) {
                    item.editing = editing;
                }
            }
            TodoIntent::SetComplete { key, complete } => {
                if let Some(item) = state.item_mut(key) {
                    item.complete = complete;
                }
            }
            TodoIntent::ToggleAllComplete => {
                let complete = !state.all_complete();
                for item in &mut state.items {
                    item.complete = complete;
                }
            }
            TodoIntent::ClearCompleted => {
                state.items = items::apply(FilterMode::Active, &state.items);
            }
            TodoIntent::SetFilter { mode } => {
                state.filter = mode;
            }
            TodoIntent::SetDraft { text } => {
                state.draft_text = text;
            }
        }
        state.refresh()
    }
}
