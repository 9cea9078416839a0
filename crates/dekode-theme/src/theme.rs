//! Theme descriptions — named, typed color schemes.
//!
//! The on-disk shape follows the VS Code theme format: a `colors` table of
//! editor UI keys and a `tokenColors` array of scope rules. Rule order is
//! significant — when two rules claim the same scope, the later one wins
//! during flattening (see [`crate::scheme`]).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A complete color scheme for rendered code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Display name (e.g., "Dark+ (default dark)").
    pub name: String,

    /// Whether this is a dark or light theme.
    #[serde(rename = "type")]
    pub kind: ThemeKind,

    /// Editor UI colors keyed by dotted identifiers
    /// (`editor.background`, `editorLineNumber.foreground`, …).
    /// Values are opaque color strings pasted into CSS as-is.
    #[serde(default)]
    pub colors: HashMap<String, String>,

    /// Ordered token-color rules. Order is load-bearing: later rules
    /// overwrite earlier ones for a repeated scope.
    #[serde(default, rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
}

/// Dark or light — consumers may pick contrasting chrome accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    /// Whether this is a dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

// ---------------------------------------------------------------------------
// Token-color rules
// ---------------------------------------------------------------------------

/// One token-color rule: a set of scopes and the style they receive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenColor {
    /// Optional human-readable label. Not used for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The scope(s) this rule styles.
    pub scope: ScopeSelector,

    /// The style applied to every scope in the selector.
    pub settings: TokenSettings,
}

/// A rule's scope field: a single scope string or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelector {
    One(String),
    Many(Vec<String>),
}

impl ScopeSelector {
    /// Iterate the scope strings regardless of shape.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(scope) => std::slice::from_ref(scope).iter(),
            Self::Many(scopes) => scopes.iter(),
        }
        .map(String::as_str)
    }
}

/// Raw style settings of a rule. Any field may be absent.
///
/// `font_style` is a space-separated word list (`"bold italic"`); it is
/// parsed into [`crate::style::FontStyle`] flags during flattening.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default, rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Failure to obtain a theme from a file or JSON string.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Theme {
    /// Parse a theme from a VS Code-style JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] when the JSON does not match the
    /// theme shape.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a theme from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] when the file cannot be read and
    /// [`ThemeError::Parse`] when its contents are not a valid theme.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
