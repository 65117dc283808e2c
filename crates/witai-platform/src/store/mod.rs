//! Persistent key-value storage.
//!
//! A string-to-string map that outlives the process, mirroring browser
//! local storage. [`FileStore`] keeps it in a JSON file; [`MemoryStore`]
//! keeps it in memory for tests and one-shot sessions.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use witai_common::StoreError;

/// String key-value storage.
///
/// Writes either fully succeed or leave the previous contents in place.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}
