//! Built-in preset stylesheets.
//!
//! Presets are plain text. Loading one neither validates nor applies it;
//! it goes through [`crate::StyleSanitizer::validate_and_apply`] like any
//! other submission.

/// Names of the built-in presets.
pub const PRESET_NAMES: &[&str] = &["dark", "colorful", "minimal"];

const DARK: &str = r#"
/* Dark Theme */
.App {
  background: linear-gradient(135deg, #2c3e50 0%, #34495e 100%) !important;
}

.tool-container {
  background: #34495e !important;
  color: #ecf0f1 !important;
}

.input-group textarea,
.input-group input {
  background: #2c3e50 !important;
  color: #ecf0f1 !important;
  border-color: #7f8c8d !important;
}

.result-box {
  background: #2c3e50 !important;
  color: #ecf0f1 !important;
  border-color: #7f8c8d !important;
}"#;

const COLORFUL: &str = r#"
/* Colorful Theme */
.App {
  background: linear-gradient(45deg, #ff6b6b, #4ecdc4, #45b7d1, #96ceb4, #ffeaa7) !important;
  background-size: 400% 400% !important;
  animation: gradientShift 15s ease infinite !important;
}

@keyframes gradientShift {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}

.tool-container {
  background: rgba(255, 255, 255, 0.95) !important;
  backdrop-filter: blur(10px) !important;
}"#;

const MINIMAL: &str = r#"
/* Minimal Theme */
.App {
  background: #f8f9fa !important;
}

.App-header {
  background: #ffffff !important;
  color: #333 !important;
  box-shadow: 0 2px 4px rgba(0,0,0,0.1) !important;
}

.tool-container {
  background: #ffffff !important;
  border: 1px solid #e9ecef !important;
  box-shadow: none !important;
}

.btn {
  background: #007bff !important;
  border-radius: 3px !important;
}"#;

/// Look up a preset stylesheet by name.
///
/// Unknown names return an empty string rather than an error; callers that
/// need to tell the difference can check [`PRESET_NAMES`].
pub fn load_preset(name: &str) -> &'static str {
    match name {
        "dark" => DARK,
        "colorful" => COLORFUL,
        "minimal" => MINIMAL,
        _ => "",
    }
}
