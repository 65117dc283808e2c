//! Style section validation: store key and element id.

use regex::Regex;
use std::sync::LazyLock;

use super::helpers::{validate_no_control_chars, validate_not_blank};
use crate::schema::WitaiConfig;

/// Element ids must be usable as a selector without escaping.
static ELEMENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap());

pub(crate) fn validate_style(errors: &mut Vec<String>, config: &WitaiConfig) {
    let style = &config.style;

    validate_not_blank(errors, "style.storage_key", &style.storage_key);
    validate_no_control_chars(errors, "style.storage_key", &style.storage_key);

    if !ELEMENT_ID_RE.is_match(&style.element_id) {
        errors.push(format!(
            "style.element_id = {:?} must start with a letter and contain only letters, digits, '-' or '_'",
            style.element_id
        ));
    }
}
