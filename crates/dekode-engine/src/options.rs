//! Formatting options — the engine's four knobs.
//!
//! [`FormatOptions`] carries the resolved values; [`OptionsPatch`] is the
//! partial form callers hand to [`crate::Formatter`], merged over the
//! current values so a caller can flip one flag without restating the rest.

/// Resolved formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per indent level. Ignored when `use_tabs` is set.
    pub indent_size: usize,

    /// Indent with one tab per level instead of spaces.
    pub use_tabs: bool,

    /// Render the line-number gutter.
    pub line_numbers: bool,

    /// Let long lines wrap instead of scrolling horizontally.
    pub wrap_code: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_tabs: false,
            line_numbers: true,
            wrap_code: true,
        }
    }
}

impl FormatOptions {
    /// The string prefixed once per indent level.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_size)
        }
    }
}

/// A partial override of [`FormatOptions`]. `None` fields keep the
/// current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionsPatch {
    pub indent_size: Option<usize>,
    pub use_tabs: Option<bool>,
    pub line_numbers: Option<bool>,
    pub wrap_code: Option<bool>,
}

impl OptionsPatch {
    /// Merge this patch into `options`.
    pub fn apply_to(&self, options: &mut FormatOptions) {
        if let Some(indent_size) = self.indent_size {
            options.indent_size = indent_size;
        }
        if let Some(use_tabs) = self.use_tabs {
            options.use_tabs = use_tabs;
        }
        if let Some(line_numbers) = self.line_numbers {
            options.line_numbers = line_numbers;
        }
        if let Some(wrap_code) = self.wrap_code {
            options.wrap_code = wrap_code;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
