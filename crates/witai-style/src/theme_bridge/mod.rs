//! Theme bridge: screening of user CSS and script generation for injecting
//! it into webview documents.

mod generate;
mod sanitize;

pub use generate::{generate_style_injection_js, generate_style_removal_js};
pub use sanitize::{is_dangerous, scan_denylist, DangerPattern};
