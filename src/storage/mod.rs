//! Durable key-value storage for the item list.
//!
//! The store itself only knows string keys and string values; [`codec`]
//! maps the item list to and from that representation and [`PersistWriter`]
//! applies writes in order off the caller's path.

pub mod codec;
mod file;
mod memory;
mod writer;

use std::path::PathBuf;
use thiserror::Error;

pub use codec::CodecError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use writer::PersistWriter;

/// Errors raised by a [`PersistentStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock store file '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode store document '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Key-value string storage that survives process restarts.
///
/// Calls may block on IO; async callers run them on the blocking pool.
pub trait PersistentStore: Send + Sync + 'static {
    /// Value stored under `key`, or `None` if nothing was saved yet.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
