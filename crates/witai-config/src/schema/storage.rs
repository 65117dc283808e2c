//! Persistent store configuration.

use serde::{Deserialize, Serialize};

/// Persistent store location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the store file. `None` uses the platform data directory.
    pub path: Option<String>,
}
