//! Stored representation of the item list: a JSON array of
//! `{key, text, complete}` records.

use std::collections::HashSet;
use thiserror::Error;

use crate::items::Item;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Saved items are not a valid item list: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn encode(items: &[Item]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(items)?)
}

/// Decode a stored list. A JSON `null` decodes to an empty list.
///
/// Later records reusing an earlier key are dropped so keys stay unique.
pub fn decode(raw: &str) -> Result<Vec<Item>, CodecError> {
    let items: Option<Vec<Item>> = serde_json::from_str(raw)?;
    let items = items.unwrap_or_default();

    let total = items.len();
    let mut seen = HashSet::with_capacity(total);
    let unique: Vec<Item> = items
        .into_iter()
        .filter(|item| seen.insert(item.key))
        .collect();

    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "Saved items contained duplicate keys"
        );
    }
    Ok(unique)
}
