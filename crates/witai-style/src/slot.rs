//! The single active custom style.
//!
//! A document holds at most one custom style element. The slot owns the
//! handle to it and is the only way to change it: replacement always
//! removes the old element before the new one is attached.

use tracing::debug;

use crate::document::StyleDocument;
use crate::stylesheet::StyleSheet;

/// Token for the style element currently injected by the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStyleHandle {
    element_id: String,
    content: String,
}

impl ActiveStyleHandle {
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Owner of the one custom style element in a document.
#[derive(Debug, Clone)]
pub struct ActiveStyleSlot {
    element_id: String,
    active: Option<ActiveStyleHandle>,
}

impl ActiveStyleSlot {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            active: None,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn active(&self) -> Option<&ActiveStyleHandle> {
        self.active.as_ref()
    }

    /// Replace the active style with `sheet`, or with nothing.
    ///
    /// An empty stylesheet attaches nothing.
    pub(crate) fn replace(&mut self, doc: &mut StyleDocument, sheet: Option<StyleSheet>) {
        self.detach(doc);

        let Some(sheet) = sheet.filter(|s| !s.is_empty()) else {
            return;
        };

        let content = sheet.text().to_string();
        doc.append_style(Some(&self.element_id), sheet);
        debug!(element_id = %self.element_id, bytes = content.len(), "Custom style attached");
        self.active = Some(ActiveStyleHandle {
            element_id: self.element_id.clone(),
            content,
        });
    }

    /// Remove the active style element, if any.
    pub(crate) fn detach(&mut self, doc: &mut StyleDocument) {
        if doc.remove_element_by_id(&self.element_id).is_some() {
            debug!(element_id = %self.element_id, "Custom style detached");
        }
        self.active = None;
    }
}
