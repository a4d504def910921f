//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ticklist::items::{FilterMode, Item, ItemKey};
use ticklist::list_store::ItemListStore;
use ticklist::storage::{codec, MemoryStore, PersistentStore, StoreError};

pub const KEY: &str = "items";

pub fn item(key: u64, text: &str, complete: bool) -> Item {
    let mut item = Item::new(ItemKey(key), text);
    item.complete = complete;
    item
}

pub fn keys(items: &[Item]) -> Vec<u64> {
    items.iter().map(|i| i.key.0).collect()
}

/// Memory store pre-seeded with `items` under [`KEY`].
pub fn seeded_store(items: &[Item]) -> MemoryStore {
    MemoryStore::with_entry(KEY, codec::encode(items).expect("encode items"))
}

/// A list that finished loading `items` from a memory store.
pub async fn loaded_list(items: &[Item]) -> (ItemListStore, MemoryStore) {
    let memory = seeded_store(items);
    let mut list = ItemListStore::new(Arc::new(memory.clone()), KEY);
    list.load().await;
    (list, memory)
}

/// Decode what is currently saved under [`KEY`].
pub fn saved_items(store: &MemoryStore) -> Option<Vec<Item>> {
    store
        .get(KEY)
        .expect("memory store never fails")
        .map(|raw| codec::decode(&raw).expect("saved items decode"))
}

/// Store whose every call fails. Counts write attempts.
#[derive(Default)]
pub struct FailingStore {
    pub writes: AtomicUsize,
}

impl PersistentStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable {
            reason: "disk on fire".to_string(),
        })
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable {
            reason: "disk on fire".to_string(),
        })
    }
}
