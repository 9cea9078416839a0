//! Style map — a theme flattened for one rendering run.
//!
//! [`StyleMap::from_theme`] walks the theme's rule list once and produces
//! an exact-match lookup from scope string to [`Style`], plus the three
//! baseline surface colors every document needs. The map is cheap to build
//! and rebuilt per format call — the engine never caches one across calls,
//! so a theme swap takes effect immediately.

use std::collections::HashMap;

use crate::style::{FontStyle, Style};
use crate::theme::Theme;

/// Background used when the theme omits `editor.background`.
pub const FALLBACK_BACKGROUND: &str = "#1e1e1e";

/// Foreground used when the theme omits `editor.foreground`.
pub const FALLBACK_FOREGROUND: &str = "#d4d4d4";

/// Gutter color used when the theme omits `editorLineNumber.foreground`.
pub const FALLBACK_LINE_NUMBER: &str = "#858585";

/// Flattened scope → style lookup for a single formatting run.
#[derive(Debug, Clone)]
pub struct StyleMap {
    /// Document background color.
    pub background: String,

    /// Default text color.
    pub foreground: String,

    /// Line-number gutter color.
    pub line_number: String,

    scopes: HashMap<String, Style>,
}

impl StyleMap {
    /// Flatten a theme.
    ///
    /// Every scope string attached to a rule gets its own entry (a rule
    /// with a scope list fans out to one entry per scope). Rules are
    /// applied in declaration order, so a later rule overwrites an earlier
    /// one for a repeated scope.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let surface = |key: &str, fallback: &str| {
            theme
                .colors
                .get(key)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };

        let mut scopes = HashMap::new();
        for rule in &theme.token_colors {
            let style = Style {
                color: rule.settings.foreground.clone(),
                background: rule.settings.background.clone(),
                font_style: rule
                    .settings
                    .font_style
                    .as_deref()
                    .map_or_else(FontStyle::empty, FontStyle::parse),
            };
            for scope in rule.scope.iter() {
                scopes.insert(scope.to_string(), style.clone());
            }
        }

        Self {
            background: surface("editor.background", FALLBACK_BACKGROUND),
            foreground: surface("editor.foreground", FALLBACK_FOREGROUND),
            line_number: surface("editorLineNumber.foreground", FALLBACK_LINE_NUMBER),
            scopes,
        }
    }

    /// Look up the style for a scope. Exact string match only —
    /// `comment.line` does not fall back to `comment`.
    #[must_use]
    pub fn get(&self, scope: &str) -> Option<&Style> {
        self.scopes.get(scope)
    }

    /// Number of distinct scope entries.
    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
