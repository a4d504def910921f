//! The single owner of the item list.
//!
//! Every operation runs the reducer, publishes the new snapshot to
//! subscribers and, when the persisted fields changed, queues a save.

use std::sync::Arc;
use tokio::sync::watch;

use crate::items::{FilterMode, Item, ItemKey, KeyGenerator};
use crate::storage::{codec, PersistWriter, PersistentStore};
use crate::ui::mvi::Reducer;
use crate::ui::todo::{TodoIntent, TodoReducer, TodoState};

/// Store key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "items";

pub struct ItemListStore {
    state: TodoState,
    keys: KeyGenerator,
    store: Arc<dyn PersistentStore>,
    storage_key: String,
    writer: PersistWriter,
    publisher: watch::Sender<TodoState>,
}

impl ItemListStore {
    /// Create an empty, still-loading list saving under `storage_key`.
    ///
    /// Starts the background writer, so this must run inside a tokio runtime.
    pub fn new(store: Arc<dyn PersistentStore>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let writer = PersistWriter::spawn(Arc::clone(&store), storage_key.clone());
        let state = TodoState::default();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            state,
            keys: KeyGenerator::new(),
            store,
            storage_key,
            writer,
            publisher,
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// Receiver that always holds the latest published state.
    pub fn subscribe(&self) -> watch::Receiver<TodoState> {
        self.publisher.subscribe()
    }

    /// Read the saved list. Missing or unreadable data yields an empty list;
    /// either way `loading` is cleared.
    pub async fn load(&mut self) {
        let store = Arc::clone(&self.store);
        let key = self.storage_key.clone();
        let read = tokio::task::spawn_blocking(move || store.get(&key)).await;

        let intent = match read {
            Ok(Ok(Some(raw))) => match codec::decode(&raw) {
                Ok(items) => {
                    tracing::info!(count = items.len(), "Loaded saved items");
                    self.keys.observe(&items);
                    TodoIntent::Loaded { items }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Ignoring unreadable saved items");
                    TodoIntent::LoadFailed
                }
            },
            Ok(Ok(None)) => {
                tracing::info!("No saved items");
                TodoIntent::LoadFailed
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "Failed to read saved items");
                TodoIntent::LoadFailed
            }
            Err(err) => {
                tracing::warn!(error = %err, "Load task failed");
                TodoIntent::LoadFailed
            }
        };
        self.apply(intent);
    }

    /// Append a new item. Blank text, or running out of keys, is ignored and
    /// leaves the draft alone.
    pub fn add_item(&mut self, text: &str) {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring blank item");
            return;
        }
        let Some(key) = self.keys.next_key() else {
            tracing::warn!("No item keys left, ignoring new item");
            return;
        };
        tracing::debug!(%key, "Adding item");
        self.dispatch(TodoIntent::Add {
            key,
            text: text.to_string(),
        });
    }

    pub fn remove_item(&mut self, key: ItemKey) {
        tracing::debug!(%key, "Removing item");
        self.dispatch(TodoIntent::Remove { key });
    }

    pub fn update_text(&mut self, key: ItemKey, text: &str) {
        self.dispatch(TodoIntent::UpdateText {
            key,
            text: text.to_string(),
        });
    }

    pub fn toggle_editing(&mut self, key: ItemKey, editing: bool) {
        self.dispatch(TodoIntent::SetEditing { key, editing });
    }

    pub fn toggle_complete(&mut self, key: ItemKey, complete: bool) {
        tracing::debug!(%key, complete, "Setting completion");
        self.dispatch(TodoIntent::SetComplete { key, complete });
    }

    pub fn toggle_all_complete(&mut self) {
        self.dispatch(TodoIntent::ToggleAllComplete);
    }

    pub fn clear_completed(&mut self) {
        self.dispatch(TodoIntent::ClearCompleted);
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        tracing::debug!(%mode, "Filter changed");
        self.dispatch(TodoIntent::SetFilter { mode });
    }

    /// Update the new-item draft. Never saved.
    pub fn set_draft(&mut self, text: &str) {
        self.apply(TodoIntent::SetDraft {
            text: text.to_string(),
        });
    }

    /// Wait until every queued save has reached the store.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    fn dispatch(&mut self, intent: TodoIntent) {
        if self.apply(intent) {
            self.persist();
        }
    }

    /// Reduce and publish. Returns whether the persisted fields changed.
    fn apply(&mut self, intent: TodoIntent) -> bool {
        let next = TodoReducer::reduce(self.state.clone(), intent);
        let changed = !same_persisted(self.state.items(), next.items());
        self.state = next;

        let state = &self.state;
        self.publisher.send_if_modified(|published| {
            if *published == *state {
                return false;
            }
            *published = state.clone();
            true
        });
        changed
    }

    fn persist(&self) {
        match codec::encode(self.state.items()) {
            Ok(payload) => self.writer.enqueue(payload),
            Err(err) => tracing::warn!(error = %err, "Failed to encode items"),
        }
    }
}

fn same_persisted(a: &[Item], b: &[Item]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x.key == y.key && x.text == y.text && x.complete == y.complete)
}
