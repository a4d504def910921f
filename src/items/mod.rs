//! To-do items and the filter that derives the visible list from them.

mod filter;
mod item;
mod key;

pub use filter::{apply, count};
pub use item::{FilterMode, Item, ItemKey};
pub use key::KeyGenerator;
