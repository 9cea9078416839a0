//! Resolved styles — what a scope actually renders as.
//!
//! A [`Style`] is the flattened form of a rule's settings: optional
//! foreground/background color strings plus a [`FontStyle`] bitfield.
//! [`Style::css`] renders the inline declaration list consumed by the
//! colorizer's `<span style="…">` wrapper.

use std::fmt::Write;

// ---------------------------------------------------------------------------
// FontStyle
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// Font-style flags stored as a compact bitfield.
    ///
    /// Themes spell these as a space-separated word list in a rule's
    /// `fontStyle` field. Combine with bitwise OR:
    ///
    /// ```
    /// use dekode_theme::FontStyle;
    ///
    /// let emphasis = FontStyle::BOLD | FontStyle::ITALIC;
    /// assert!(emphasis.contains(FontStyle::BOLD));
    /// assert!(!emphasis.contains(FontStyle::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct FontStyle: u8 {
        /// `font-weight: bold`.
        const BOLD      = 1 << 0;
        /// `font-style: italic`.
        const ITALIC    = 1 << 1;
        /// `text-decoration: underline`.
        const UNDERLINE = 1 << 2;
    }
}

impl FontStyle {
    /// Parse a theme `fontStyle` word list (`"bold italic"`).
    ///
    /// Unknown words are ignored; an empty or unrecognized spec yields
    /// empty flags.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut flags = Self::empty();
        if spec.contains("bold") {
            flags |= Self::BOLD;
        }
        if spec.contains("italic") {
            flags |= Self::ITALIC;
        }
        if spec.contains("underline") {
            flags |= Self::UNDERLINE;
        }
        flags
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// A resolved per-scope style.
///
/// Any field may be absent — a rule that sets only a foreground color
/// leaves the rest untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color string (e.g., `#569cd6`).
    pub color: Option<String>,

    /// Background color string.
    pub background: Option<String>,

    /// Bold/italic/underline flags.
    pub font_style: FontStyle,
}

impl Style {
    /// Whether the style carries no visible effect at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.background.is_none() && self.font_style.is_empty()
    }

    /// Render the inline CSS declaration list for this style.
    ///
    /// Declarations appear in a fixed order: color, background-color,
    /// font-weight, font-style, text-decoration.
    #[must_use]
    pub fn css(&self) -> String {
        let mut css = String::new();
        if let Some(color) = &self.color {
            let _ = write!(css, "color: {color};");
        }
        if let Some(background) = &self.background {
            let _ = write!(css, "background-color: {background};");
        }
        if self.font_style.contains(FontStyle::BOLD) {
            css.push_str("font-weight: bold;");
        }
        if self.font_style.contains(FontStyle::ITALIC) {
            css.push_str("font-style: italic;");
        }
        if self.font_style.contains(FontStyle::UNDERLINE) {
            css.push_str("text-decoration: underline;");
        }
        css
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
