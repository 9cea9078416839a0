//! # dekode-theme — color schemes for code images
//!
//! A theme describes how a rendered code block looks: the editor surface
//! colors (background, foreground, line numbers) and an ordered list of
//! token-color rules mapping *scope identifiers* (`comment.line`,
//! `entity.name.tag`, …) to styles.
//!
//! # Architecture
//!
//! ```text
//! Theme (named, dark/light, rules in declaration order)
//!     │
//!     ▼
//! scheme.rs: StyleMap::from_theme — flatten to an exact-match lookup
//!     │         (three baseline colors + one entry per scope string)
//!     ▼
//! consumers read resolved Style values; no theme traversal at render time
//! ```
//!
//! Scope identifiers are opaque strings compared by exact equality — there
//! is no prefix or hierarchy matching. `comment.line` and `comment` are
//! unrelated keys.
//!
//! Themes are serde-shaped like VS Code theme JSON, so user-supplied theme
//! files load directly via [`Theme::load`]. A handful of presets live in
//! [`builtin`].

pub mod builtin;
pub mod scheme;
pub mod style;
pub mod theme;

pub use scheme::StyleMap;
pub use style::{FontStyle, Style};
pub use theme::{ScopeSelector, Theme, ThemeError, ThemeKind, TokenColor, TokenSettings};
