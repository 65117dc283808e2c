//! Denylist screening of user-supplied stylesheets.
//!
//! Rejects stylesheets containing known CSS script-injection vectors:
//! - `javascript:` URIs
//! - `expression(...)` (legacy IE script execution)
//! - `behavior:` bindings
//! - `@import` directives
//! - `url("javascript:...")` forms
//!
//! Matching is case-insensitive and purely textual, so comments and
//! strings are not exempt. This is a best-effort guard: regular expressions
//! cannot fully parse CSS or URI grammars, and escapes such as `java\script:`
//! slip through.

use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// PATTERNS
// =============================================================================

/// A denylisted injection vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerPattern {
    JavascriptUri,
    Expression,
    Behavior,
    Import,
    JavascriptUrl,
}

impl DangerPattern {
    /// All patterns, in scan order. `JavascriptUrl` is a special case of
    /// `JavascriptUri`, so it is scanned first to be reported at all.
    pub const ALL: [DangerPattern; 5] = [
        DangerPattern::JavascriptUrl,
        DangerPattern::JavascriptUri,
        DangerPattern::Expression,
        DangerPattern::Behavior,
        DangerPattern::Import,
    ];

    /// Regex source, matched case-insensitively.
    pub fn source(self) -> &'static str {
        match self {
            DangerPattern::JavascriptUri => r"javascript:",
            DangerPattern::Expression => r"expression\s*\(",
            DangerPattern::Behavior => r"behavior\s*:",
            DangerPattern::Import => r"@import",
            DangerPattern::JavascriptUrl => r#"url\s*\(\s*["']?javascript:"#,
        }
    }
}

impl std::fmt::Display for DangerPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source())
    }
}

static DENYLIST: LazyLock<Vec<(DangerPattern, Regex)>> = LazyLock::new(|| {
    DangerPattern::ALL
        .iter()
        .map(|&p| (p, Regex::new(&format!("(?i){}", p.source())).unwrap()))
        .collect()
});

// =============================================================================
// SCANNING
// =============================================================================

/// Return the first denylisted pattern found in `css`, if any.
pub fn scan_denylist(css: &str) -> Option<DangerPattern> {
    DENYLIST
        .iter()
        .find(|(_, re)| re.is_match(css))
        .map(|(pattern, _)| *pattern)
}

/// Whether `css` contains any denylisted pattern.
pub fn is_dangerous(css: &str) -> bool {
    scan_denylist(css).is_some()
}

// =============================================================================
// TESTS
// =============================================================================
