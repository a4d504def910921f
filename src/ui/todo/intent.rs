use crate::items::{FilterMode, Item, ItemKey};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TodoIntent {
    /// Initial read finished with these items.
    Loaded { items: Vec<Item> },
    /// Initial read found nothing usable. Items stay as they are.
    LoadFailed,
    /// Append a new active item. Blank text is ignored.
    Add { key: ItemKey, text: String },
    Remove { key: ItemKey },
    UpdateText { key: ItemKey, text: String },
    SetEditing { key: ItemKey, editing: bool },
    SetComplete { key: ItemKey, complete: bool },
    /// Flip every item to the opposite of the current `all_complete`.
    ToggleAllComplete,
    ClearCompleted,
    SetFilter { mode: FilterMode },
    /// Local draft edit, never persisted.
    SetDraft { text: String },
}

impl Intent for TodoIntent {}
