//! Custom CSS for the Witai client.
//!
//! Takes untrusted CSS from the user and, if it passes, persists it and
//! injects it into the document as a single identifiable `<style>` element:
//! - Denylist screening of known CSS script-injection vectors
//! - A parse probe in a throwaway document
//! - One owned active style slot with detach-before-attach replacement
//! - Built-in preset stylesheets
//! - JavaScript snippets for applying the style inside a webview
//!
//! The denylist is a best-effort guard, not a security boundary: regular
//! expressions cannot fully parse CSS or URI grammars.

pub mod document;
pub mod presets;
pub mod sanitizer;
pub mod slot;
pub mod stylesheet;
pub mod theme_bridge;

pub use document::{StyleDocument, StyleElement};
pub use presets::{load_preset, PRESET_NAMES};
pub use sanitizer::{SanitizerOptions, StyleSanitizer};
pub use slot::{ActiveStyleHandle, ActiveStyleSlot};
pub use stylesheet::{ParseFault, StyleSheet};
