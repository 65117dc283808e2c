use std::path::PathBuf;

use witai_common::PlatformError;

pub(super) const APP_NAME: &str = "witai";

/// Returns the platform-specific configuration directory for Witai.
///
/// - macOS: `~/Library/Application Support/witai`
/// - Linux: `$XDG_CONFIG_HOME/witai` (defaults to `~/.config/witai`)
/// - Windows: `%APPDATA%\witai`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Witai.
///
/// - macOS: `~/Library/Application Support/witai`
/// - Linux: `$XDG_DATA_HOME/witai` (defaults to `~/.local/share/witai`)
/// - Windows: `%APPDATA%\witai`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
///
/// Located at `config_dir()/config.toml`.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the path to the persistent key-value store.
///
/// Located at `data_dir()/local-storage.json`.
pub fn store_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("local-storage.json"))
}
