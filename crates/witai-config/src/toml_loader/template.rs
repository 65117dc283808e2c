//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Witai Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[style]
# Store key holding the last applied custom CSS.
storage_key = "witai-custom-css"
# Id of the injected <style> element.
element_id = "custom-css-style"

[storage]
# Store file override. Defaults to <data dir>/witai/local-storage.json
# path = "/path/to/local-storage.json"

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
