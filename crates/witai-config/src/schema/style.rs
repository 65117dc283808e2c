//! Custom style configuration types.

use serde::{Deserialize, Serialize};

/// Store key under which the last applied custom CSS is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "witai-custom-css";

/// Id of the injected `<style>` element.
pub const DEFAULT_ELEMENT_ID: &str = "custom-css-style";

/// Where custom CSS is persisted and how it is tagged in the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub storage_key: String,
    pub element_id: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            element_id: DEFAULT_ELEMENT_ID.into(),
        }
    }
}
