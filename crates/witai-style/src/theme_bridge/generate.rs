//! JavaScript generation for applying a custom style inside a webview.
//!
//! The snippets mirror the slot's semantics in the page: find the element
//! by id and remove it, then append a fresh `<style>` carrying the CSS.

// =============================================================================
// ESCAPING
// =============================================================================

/// Encode `value` as a JavaScript string literal.
///
/// JSON string syntax is valid JavaScript; `</` is further escaped so the
/// snippet can sit inside an inline `<script>` element.
fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

// =============================================================================
// SCRIPT GENERATION
// =============================================================================

/// Generate a snippet that replaces the style element `element_id` with one
/// holding `css`.
pub fn generate_style_injection_js(element_id: &str, css: &str) -> String {
    let id = js_string_literal(element_id);
    let text = js_string_literal(css);
    format!(
        "(function() {{\n\
         \x20 var old = document.getElementById({id});\n\
         \x20 if (old) {{ old.remove(); }}\n\
         \x20 var el = document.createElement('style');\n\
         \x20 el.id = {id};\n\
         \x20 el.textContent = {text};\n\
         \x20 document.head.appendChild(el);\n\
         }})();"
    )
}

/// Generate a snippet that removes the style element `element_id`, if present.
pub fn generate_style_removal_js(element_id: &str) -> String {
    let id = js_string_literal(element_id);
    format!(
        "(function() {{\n\
         \x20 var old = document.getElementById({id});\n\
         \x20 if (old) {{ old.remove(); }}\n\
         }})();"
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injection_removes_then_appends() {
        let js = generate_style_injection_js("custom-css-style", "body { color: red; }");

        let remove = js.find("old.remove()").unwrap();
        let append = js.find("appendChild(el)").unwrap();
        assert!(remove < append);
        assert!(js.contains("document.getElementById(\"custom-css-style\")"));
        assert!(js.contains("el.textContent = \"body { color: red; }\";"));
    }

    #[test]
    fn injection_escapes_quotes_and_newlines() {
        let js = generate_style_injection_js("s", "a::after {\n  content: \"x\";\n}");
        assert!(js.contains(r#"el.textContent = "a::after {\n  content: \"x\";\n}";"#));
    }

    #[test]
    fn injection_escapes_backslashes() {
        let js = generate_style_injection_js("s", r".a\:b { color: red; }");
        assert!(js.contains(r#"".a\\:b { color: red; }""#));
    }

    #[test]
    fn injection_cannot_close_script_tag() {
        let js = generate_style_injection_js("s", "a::after { content: \"</script>\"; }");
        assert!(!js.contains("</script>"));
        assert!(js.contains("<\\/script>"));
    }

    #[test]
    fn removal_only_removes() {
        let js = generate_style_removal_js("custom-css-style");
        assert!(js.contains("document.getElementById(\"custom-css-style\")"));
        assert!(js.contains("old.remove()"));
        assert!(!js.contains("appendChild"));
    }

    #[test]
    fn snippets_are_wrapped_in_iife() {
        let js = generate_style_removal_js("s");
        assert!(js.starts_with("(function() {"));
        assert!(js.ends_with("})();"));
    }
}
