//! # dekode-engine — the code formatting pipeline
//!
//! Turns a raw source blob into a complete, self-contained HTML document:
//! syntax-highlighted, framed in window chrome, ready for an external
//! rasterizer to screenshot into a code image.
//!
//! # Architecture
//!
//! ```text
//! code + optional filename
//!     │
//!     ▼
//! language.rs:  recognize — extension table, then content signatures
//!     │
//!     ▼
//! indent.rs:    reindent — bracket-depth cosmetic re-indentation
//!     │
//!     ▼
//! tokenize.rs:  per-language regex rule tables → tokens sorted by start
//!     │
//!     ▼
//! colorize.rs:  overlap sweep, then escaped text + styled spans
//!     │
//!     ▼
//! document.rs:  themed HTML document with chrome, gutter, line wrapping
//! ```
//!
//! The pipeline is pure and synchronous: no I/O, no shared state, no
//! failure path. Unknown languages degrade to an unstyled plaintext
//! document — still valid output. [`Formatter`] holds the only
//! configuration (theme + options) and threads it through each stage;
//! construct one per concurrent rendering job if themes differ.

pub mod colorize;
pub mod document;
pub mod formatter;
pub mod indent;
pub mod language;
pub mod options;
pub mod token;
pub mod tokenize;

pub use formatter::Formatter;
pub use language::Language;
pub use options::{FormatOptions, OptionsPatch};
pub use token::{Token, TokenKind};
