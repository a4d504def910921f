mod common;

use common::item;
use ticklist::items::{apply, count, FilterMode, Item};

/// Every completion pattern for lists of up to `max_len` items.
fn all_lists(max_len: usize) -> Vec<Vec<Item>> {
    let mut lists = Vec::new();
    for len in 0..=max_len {
        for mask in 0u32..(1 << len) {
            let list = (0..len)
                .map(|i| item(i as u64 + 1, &format!("item {i}"), mask & (1 << i) != 0))
                .collect();
            lists.push(list);
        }
    }
    lists
}

fn is_subsequence(sub: &[Item], full: &[Item]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|candidate| candidate == wanted))
}

#[test]
fn all_returns_everything_in_order() {
    for list in all_lists(5) {
        assert_eq!(apply(FilterMode::All, &list), list);
    }
}

#[test]
fn every_mode_preserves_relative_order() {
    for list in all_lists(5) {
        for mode in FilterMode::all() {
            let filtered = apply(*mode, &list);
            assert!(is_subsequence(&filtered, &list), "{mode} reordered {list:?}");
        }
    }
}

#[test]
fn active_and_completed_partition_the_list() {
    for list in all_lists(5) {
        let active = apply(FilterMode::Active, &list);
        let completed = apply(FilterMode::Completed, &list);

        assert_eq!(active.len() + completed.len(), list.len());
        assert!(active.iter().all(|i| !i.complete));
        assert!(completed.iter().all(|i| i.complete));
        for entry in &list {
            let hits = active.iter().filter(|i| i.key == entry.key).count()
                + completed.iter().filter(|i| i.key == entry.key).count();
            assert_eq!(hits, 1);
        }
    }
}

#[test]
fn count_matches_apply() {
    for list in all_lists(4) {
        for mode in FilterMode::all() {
            assert_eq!(count(*mode, &list), apply(*mode, &list).len());
        }
    }
}
