//! Witai configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use witai_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{WitaiConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use witai_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a documented config file written on first use.
/// An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<WitaiConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WitaiConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = WitaiConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"style\""));
        assert!(json.contains("\"storage\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"witai-custom-css\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = WitaiConfig::default();
        let json = config_to_json(&config);
        let parsed: WitaiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.style, config.style);
        assert_eq!(parsed.logging.level, config.logging.level);
    }

    #[test]
    fn load_config_with_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
