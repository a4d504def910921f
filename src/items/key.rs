use std::time::{SystemTime, UNIX_EPOCH};

use super::item::{Item, ItemKey};

/// Hands out strictly increasing item keys based on wall-clock milliseconds.
///
/// Two items created within the same millisecond (or after the clock went
/// backwards) get `last + 1`. Once `u64::MAX` has been handed out or
/// observed, no further keys are available.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    last: u64,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next key, never equal to one handed out or observed before.
    /// `None` when the key space is exhausted.
    pub fn next_key(&mut self) -> Option<ItemKey> {
        self.next_at(now_millis())
    }

    /// Make sure future keys sort after every key in `items`.
    pub fn observe(&mut self, items: &[Item]) {
        if let Some(max) = items.iter().map(|item| item.key.0).max() {
            self.last = self.last.max(max);
        }
    }

    fn next_at(&mut self, now: u64) -> Option<ItemKey> {
        let key = if now > self.last {
            now
        } else {
            self.last.checked_add(1)?
        };
        self.last = key;
        Some(ItemKey(key))
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
