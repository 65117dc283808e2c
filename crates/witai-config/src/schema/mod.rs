//! Configuration schema types for Witai.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the web client hard-coded.

mod storage;
mod style;
mod system;

pub use storage::*;
pub use style::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Witai.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WitaiConfig {
    pub style: StyleConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}
