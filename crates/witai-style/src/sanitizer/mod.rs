//! `StyleSanitizer`: screen, probe, persist and apply user CSS.
//!
//! A submission goes through three short-circuiting steps:
//!
//! 1. Denylist scan ([`crate::theme_bridge::scan_denylist`]). A hit is
//!    `DangerousContent`.
//! 2. Parse probe: the CSS is registered in a throwaway document and
//!    discarded. Malformed CSS is recovered the way a style engine would;
//!    only an unrecoverable fault is `InvalidSyntax`.
//! 3. Commit: the store is written first, then the active style slot is
//!    replaced.
//!
//! Rejected submissions have no side effects. The sanitizer owns the
//! document and the slot, so nothing else can attach a custom style.


use tracing::{debug, info, warn};
use witai_common::{StoreError, StyleError, ValidationError};
use witai_platform::KeyValueStore;

use crate::document::StyleDocument;
use crate::presets;
use crate::slot::{ActiveStyleHandle, ActiveStyleSlot};
use crate::stylesheet::{ParseFault, StyleSheet};
use crate::theme_bridge::{generate_style_injection_js, generate_style_removal_js, scan_denylist};

/// Store key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "witai-custom-css";

/// Style element id used when none is configured.
pub const DEFAULT_ELEMENT_ID: &str = "custom-css-style";

/// Where the sanitizer persists CSS and how it tags the injected element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizerOptions {
    pub storage_key: String,
    pub element_id: String,
}

impl Default for SanitizerOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            element_id: DEFAULT_ELEMENT_ID.into(),
        }
    }
}

/// Applies user CSS to a document, backed by a persistent store.
pub struct StyleSanitizer<S: KeyValueStore> {
    store: S,
    storage_key: String,
    document: StyleDocument,
    slot: ActiveStyleSlot,
    last_error: Option<ValidationError>,
}

impl<S: KeyValueStore> StyleSanitizer<S> {
    /// Create a sanitizer over an empty document and restore the persisted
    /// style, if any.
    pub fn new(store: S, options: SanitizerOptions) -> Result<Self, StoreError> {
        Self::with_document(store, options, StyleDocument::new())
    }

    /// Create a sanitizer over an existing document and restore the
    /// persisted style, if any.
    ///
    /// A persisted style that now trips the denylist or fails to parse is
    /// left in the store but not attached.
    pub fn with_document(
        store: S,
        options: SanitizerOptions,
        document: StyleDocument,
    ) -> Result<Self, StoreError> {
        let mut sanitizer = Self {
            store,
            storage_key: options.storage_key,
            document,
            slot: ActiveStyleSlot::new(options.element_id),
            last_error: None,
        };
        sanitizer.restore()?;
        Ok(sanitizer)
    }

    fn restore(&mut self) -> Result<(), StoreError> {
        let Some(saved) = self.store.get_item(&self.storage_key)? else {
            return Ok(());
        };
        if saved.is_empty() {
            return Ok(());
        }

        if let Some(pattern) = scan_denylist(&saved) {
            warn!(
                key = %self.storage_key,
                %pattern,
                "Persisted style hits the denylist; not restoring"
            );
            return Ok(());
        }

        match StyleSheet::parse(&saved) {
            Ok(sheet) => {
                info!(key = %self.storage_key, bytes = saved.len(), "Restored persisted style");
                self.slot.replace(&mut self.document, Some(sheet));
            }
            Err(fault) => {
                warn!(
                    key = %self.storage_key,
                    %fault,
                    "Persisted style does not parse; not restoring"
                );
            }
        }
        Ok(())
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Screen `code`, and if it passes, persist it and make it the active style.
    ///
    /// Any previously surfaced error is cleared first and replaced by the
    /// validation error on failure.
    pub fn validate_and_apply(&mut self, code: &str) -> Result<(), StyleError> {
        self.last_error = None;

        let sheet = match screen(code) {
            Ok(sheet) => sheet,
            Err(e) => {
                self.last_error = Some(e.clone());
                return Err(e.into());
            }
        };

        self.store.set_item(&self.storage_key, code)?;
        self.slot.replace(&mut self.document, Some(sheet));

        info!(
            key = %self.storage_key,
            bytes = code.len(),
            "Custom style applied"
        );
        Ok(())
    }

    /// Remove the custom style: clear the store, detach the element and
    /// clear any surfaced error. Calling it again is a no-op.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.store.remove_item(&self.storage_key)?;
        self.slot.detach(&mut self.document);
        self.last_error = None;
        info!(key = %self.storage_key, "Custom style reset");
        Ok(())
    }

    /// Preset text for `name`; `""` for unknown names. Not applied.
    pub fn load_preset(&self, name: &str) -> &'static str {
        presets::load_preset(name)
    }

    // =========================================================================
    // STATE
    // =========================================================================

    /// The error from the last failed submission, until the next
    /// submission or reset.
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// The CSS currently persisted in the store.
    pub fn persisted(&self) -> Result<Option<String>, StoreError> {
        self.store.get_item(&self.storage_key)
    }

    pub fn active(&self) -> Option<&ActiveStyleHandle> {
        self.slot.active()
    }

    pub fn document(&self) -> &StyleDocument {
        &self.document
    }

    pub fn element_id(&self) -> &str {
        self.slot.element_id()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Script bringing a webview document in line with the active style.
    pub fn injection_script(&self) -> String {
        match self.slot.active() {
            Some(handle) => generate_style_injection_js(handle.element_id(), handle.content()),
            None => generate_style_removal_js(self.slot.element_id()),
        }
    }
}

/// Run the denylist scan, then the parse probe.
fn screen(code: &str) -> Result<StyleSheet, ValidationError> {
    if let Some(pattern) = scan_denylist(code) {
        warn!(%pattern, "Custom style rejected: dangerous content");
        return Err(ValidationError::DangerousContent {
            pattern: pattern.to_string(),
        });
    }

    probe(code).map_err(|fault| {
        warn!(%fault, "Custom style rejected: invalid syntax");
        ValidationError::InvalidSyntax {
            detail: fault.to_string(),
        }
    })
}

/// Register `code` in a throwaway document and discard it.
///
/// Style engines recover from nearly every malformed input, so this is a
/// tripwire, not a validator.
fn probe(code: &str) -> Result<StyleSheet, ParseFault> {
    let sheet = StyleSheet::parse(code)?;
    if sheet.recovered() > 0 {
        debug!(recovered = sheet.recovered(), "Custom style parsed with error recovery");
    }
    let mut scratch = StyleDocument::new();
    scratch.append_style(None, sheet.clone());
    drop(scratch);
    Ok(sheet)
}
