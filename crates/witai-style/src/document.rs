//! In-memory model of a document's style elements.
//!
//! Tracks the `<style>` elements in a document head in insertion order,
//! which is also cascade order. Elements only hold stylesheets that the
//! style engine has already parsed.

use crate::stylesheet::StyleSheet;

/// One `<style>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    id: Option<String>,
    sheet: StyleSheet,
}

impl StyleElement {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> &str {
        self.sheet.text()
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }
}

/// The style elements of a document head.
#[derive(Debug, Clone, Default)]
pub struct StyleDocument {
    styles: Vec<StyleElement>,
}

impl StyleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// All style elements, in cascade order.
    pub fn styles(&self) -> &[StyleElement] {
        &self.styles
    }

    /// First element carrying `id`, like `document.getElementById`.
    pub fn get_element_by_id(&self, id: &str) -> Option<&StyleElement> {
        self.styles.iter().find(|el| el.id() == Some(id))
    }

    /// Number of elements carrying `id`.
    pub fn count_by_id(&self, id: &str) -> usize {
        self.styles.iter().filter(|el| el.id() == Some(id)).count()
    }

    /// Append a style element at the end of the head.
    pub fn append_style(&mut self, id: Option<&str>, sheet: StyleSheet) {
        self.styles.push(StyleElement {
            id: id.map(str::to_string),
            sheet,
        });
    }

    /// Remove the first element carrying `id`, returning it.
    pub fn remove_element_by_id(&mut self, id: &str) -> Option<StyleElement> {
        let index = self.styles.iter().position(|el| el.id() == Some(id))?;
        Some(self.styles.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Render the style elements as HTML for a document `<head>`.
    ///
    /// `</` in stylesheet text becomes `<\/`, which CSS reads identically but
    /// cannot close the `<style>` element early.
    pub fn render_head_html(&self) -> String {
        let mut html = String::new();
        for el in &self.styles {
            match el.id() {
                Some(id) => {
                    html.push_str(&format!("<style id=\"{}\">", escape_attribute(id)));
                }
                None => html.push_str("<style>"),
            }
            html.push_str(&el.text().replace("</", "<\\/"));
            html.push_str("</style>\n");
        }
        html
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
