use super::item::{FilterMode, Item};

/// Order-preserving filter of `items` by `mode`.
pub fn apply(mode: FilterMode, items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches(mode, item))
        .cloned()
        .collect()
}

/// Number of items `apply(mode, items)` would return.
pub fn count(mode: FilterMode, items: &[Item]) -> usize {
    items.iter().filter(|item| matches(mode, item)).count()
}

fn matches(mode: FilterMode, item: &Item) -> bool {
    match mode {
        FilterMode::All => true,
        FilterMode::Active => !item.complete,
        FilterMode::Completed => item.complete,
    }
}
