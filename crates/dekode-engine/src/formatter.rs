//! The formatter — public entry point sequencing the whole pipeline.
//!
//! A [`Formatter`] owns exactly two pieces of state: the active theme and
//! the formatting options. Everything else (style map, tokens, markup) is
//! derived fresh inside each [`Formatter::format`] call and discarded, so
//! sequential calls are reentrant and a theme or options swap takes effect
//! on the next call. For concurrent rendering with different themes,
//! construct one formatter per job — there is no global state to collide
//! on.

use dekode_theme::{StyleMap, Theme};

use crate::colorize;
use crate::document;
use crate::indent;
use crate::language;
use crate::options::{FormatOptions, OptionsPatch};
use crate::tokenize;

/// Renders source code into themed, self-contained HTML documents.
#[derive(Debug, Clone)]
pub struct Formatter {
    theme: Theme,
    options: FormatOptions,
}

impl Formatter {
    /// Create a formatter with default options.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            options: FormatOptions::default(),
        }
    }

    /// Create a formatter with a partial options override merged over the
    /// defaults.
    #[must_use]
    pub fn with_options(theme: Theme, patch: OptionsPatch) -> Self {
        let mut options = FormatOptions::default();
        patch.apply_to(&mut options);
        Self { theme, options }
    }

    /// Replace the theme wholesale. Takes effect on the next `format`.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Merge a partial options override into the current options.
    pub fn set_options(&mut self, patch: OptionsPatch) {
        patch.apply_to(&mut self.options);
    }

    /// The active theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The current options.
    #[must_use]
    pub const fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format source code into a complete HTML document.
    ///
    /// The stages run in fixed order: recognize the language (the filename
    /// hint wins over content), flatten the theme, re-indent, tokenize,
    /// sweep and colorize, then assemble the document. The pipeline never
    /// fails — unrecognized input degrades to an unstyled plaintext
    /// rendering, which is still a valid document.
    #[must_use]
    pub fn format(&self, code: &str, filename: Option<&str>) -> String {
        let language = language::recognize(code, filename);
        let map = StyleMap::from_theme(&self.theme);
        let indented = indent::reindent(code, &self.options.indent_unit());
        let tokens = colorize::resolve_overlaps(tokenize::tokenize(&indented, language));
        let colorized = colorize::colorize(&indented, &tokens, &map);
        document::render(&colorized, language, &map, &self.options)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
