//! Platform services: directory resolution and the persistent key-value
//! store that survives across sessions.

pub mod paths;
pub mod store;

pub use paths::{config_dir, config_file, data_dir, ensure_dirs, store_file};
pub use store::{FileStore, KeyValueStore, MemoryStore};
