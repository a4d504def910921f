mod common;

use common::{item, keys};
use ticklist::items::{FilterMode, ItemKey};
use ticklist::ui::mvi::Reducer;
use ticklist::ui::todo::{TodoIntent, TodoReducer, TodoState};

fn state(items: Vec<ticklist::items::Item>) -> TodoState {
    TodoState::with_items(items, FilterMode::All)
}

#[test]
fn loaded_replaces_items_and_clears_loading() {
    let new = TodoReducer::reduce(
        TodoState::default(),
        TodoIntent::Loaded {
            items: vec![item(1, "a", false), item(2, "b", true)],
        },
    );
    assert!(!new.loading());
    assert_eq!(keys(new.items()), vec![1, 2]);
    assert_eq!(keys(new.filtered_view()), vec![1, 2]);
    assert_eq!(new.active_count(), 1);
}

#[test]
fn load_failed_keeps_empty_list() {
    let new = TodoReducer::reduce(TodoState::default(), TodoIntent::LoadFailed);
    assert!(!new.loading());
    assert!(new.items().is_empty());
}

#[test]
fn add_appends_active_item_and_clears_draft() {
    let start = TodoReducer::reduce(
        state(vec![]),
        TodoIntent::SetDraft {
            text: "Buy milk".to_string(),
        },
    );
    let new = TodoReducer::reduce(
        start,
        TodoIntent::Add {
            key: ItemKey(10),
            text: "Buy milk".to_string(),
        },
    );
    assert_eq!(new.items().len(), 1);
    assert_eq!(new.items()[0].text, "Buy milk");
    assert!(!new.items()[0].complete);
    assert_eq!(new.draft_text(), "");
}

#[test]
fn add_blank_text_is_noop() {
    let start = TodoReducer::reduce(
        state(vec![]),
        TodoIntent::SetDraft {
            text: "   ".to_string(),
        },
    );
    let new = TodoReducer::reduce(
        start.clone(),
        TodoIntent::Add {
            key: ItemKey(10),
            text: "   ".to_string(),
        },
    );
    assert_eq!(new, start);
}

#[test]
fn add_with_existing_key_is_noop() {
    let start = state(vec![item(1, "a", false)]);
    let new = TodoReducer::reduce(
        start.clone(),
        TodoIntent::Add {
            key: ItemKey(1),
            text: "dup".to_string(),
        },
    );
    assert_eq!(new, start);
}

#[test]
fn add_respects_current_filter() {
    let start = TodoState::with_items(vec![item(1, "a", true)], FilterMode::Completed);
    let new = TodoReducer::reduce(
        start,
        TodoIntent::Add {
            key: ItemKey(2),
            text: "b".to_string(),
        },
    );
    assert_eq!(keys(new.items()), vec![1, 2]);
    assert_eq!(keys(new.filtered_view()), vec![1]);
}

#[test]
fn update_text_replaces_matching_item_only() {
    let new = TodoReducer::reduce(
        state(vec![item(1, "a", false), item(2, "b", false)]),
        TodoIntent::UpdateText {
            key: ItemKey(2),
            text: "bee".to_string(),
        },
    );
    assert_eq!(new.items()[0].text, "a");
    assert_eq!(new.items()[1].text, "bee");
}

#[test]
fn update_text_unknown_key_is_noop() {
    let start = state(vec![item(1, "a", false)]);
    let new = TodoReducer::reduce(
        start.clone(),
        TodoIntent::UpdateText {
            key: ItemKey(99),
            text: "x".to_string(),
        },
    );
    assert_eq!(new, start);
}

#[test]
fn set_editing_flags_item() {
    let new = TodoReducer::reduce(
        state(vec![item(1, "a", false)]),
        TodoIntent::SetEditing {
            key: ItemKey(1),
            editing: true,
        },
    );
    assert!(new.items()[0].editing);
    assert!(new.filtered_view()[0].editing);
}

#[test]
fn set_complete_moves_item_between_filters() {
    let start = TodoState::with_items(
        vec![item(1, "a", false), item(2, "b", false)],
        FilterMode::Active,
    );
    let new = TodoReducer::reduce(
        start,
        TodoIntent::SetComplete {
            key: ItemKey(1),
            complete: true,
        },
    );
    assert_eq!(keys(new.filtered_view()), vec![2]);
    assert_eq!(new.active_count(), 1);
}

#[test]
fn toggle_all_complete_flips_back_and_forth() {
    let once = TodoReducer::reduce(
        state(vec![item(1, "A", false)]),
        TodoIntent::ToggleAllComplete,
    );
    assert!(once.items()[0].complete);
    assert!(once.all_complete());

    let twice = TodoReducer::reduce(once, TodoIntent::ToggleAllComplete);
    assert!(!twice.items()[0].complete);
    assert!(!twice.all_complete());
}

#[test]
fn all_complete_tracks_item_by_item_changes() {
    let start = state(vec![item(1, "a", false), item(2, "b", true)]);
    assert!(!start.all_complete());

    let new = TodoReducer::reduce(
        start,
        TodoIntent::SetComplete {
            key: ItemKey(1),
            complete: true,
        },
    );
    assert!(new.all_complete());

    // Everything is already complete, so toggling all un-completes.
    let toggled = TodoReducer::reduce(new, TodoIntent::ToggleAllComplete);
    assert!(toggled.items().iter().all(|i| !i.complete));
}

#[test]
fn toggle_all_on_mixed_list_completes_everything() {
    let new = TodoReducer::reduce(
        state(vec![item(1, "a", true), item(2, "b", false)]),
        TodoIntent::ToggleAllComplete,
    );
    assert!(new.items().iter().all(|i| i.complete));
}

#[test]
fn empty_list_is_never_all_complete() {
    let new = TodoReducer::reduce(state(vec![]), TodoIntent::ToggleAllComplete);
    assert!(!new.all_complete());
    assert!(new.items().is_empty());
}

#[test]
fn clear_completed_keeps_active_items() {
    let new = TodoReducer::reduce(
        state(vec![item(1, "A", true), item(2, "B", false)]),
        TodoIntent::ClearCompleted,
    );
    assert_eq!(keys(new.items()), vec![2]);
}

#[test]
fn remove_twice_is_noop_the_second_time() {
    let once = TodoReducer::reduce(
        state(vec![item(1, "A", false), item(2, "B", false)]),
        TodoIntent::Remove { key: ItemKey(1) },
    );
    assert_eq!(keys(once.items()), vec![2]);

    let twice = TodoReducer::reduce(once.clone(), TodoIntent::Remove { key: ItemKey(1) });
    assert_eq!(twice, once);
}

#[test]
fn set_filter_shows_matching_items() {
    let new = TodoReducer::reduce(
        state(vec![item(1, "A", false), item(2, "B", true)]),
        TodoIntent::SetFilter {
            mode: FilterMode::Active,
        },
    );
    assert_eq!(new.filter(), FilterMode::Active);
    assert_eq!(keys(new.filtered_view()), vec![1]);
    assert_eq!(keys(new.items()), vec![1, 2]);
}

#[test]
fn set_filter_is_idempotent() {
    let start = state(vec![item(1, "A", false), item(2, "B", true)]);
    for mode in FilterMode::all() {
        let once = TodoReducer::reduce(start.clone(), TodoIntent::SetFilter { mode: *mode });
        let twice = TodoReducer::reduce(once.clone(), TodoIntent::SetFilter { mode: *mode });
        assert_eq!(once.filtered_view(), twice.filtered_view());
        assert_eq!(once, twice);
    }
}
