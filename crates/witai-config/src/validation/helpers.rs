//! Shared helpers used by the domain validators.

/// Push an error if `value` is empty or only whitespace.
pub(crate) fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

/// Push an error if `value` contains control characters.
pub(crate) fn validate_no_control_chars(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.chars().any(char::is_control) {
        errors.push(format!("{name} = {value:?} contains control characters"));
    }
}
