//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod storage;
mod style;


use crate::schema::WitaiConfig;
use witai_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WitaiConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    style::validate_style(&mut errors, config);
    storage::validate_storage(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
