//! Colorization — overlap sweep, escaping, and styled span emission.
//!
//! Tokenization hands over a start-sorted list that may contain
//! overlapping spans (independent rules scanned the same text). The
//! [`resolve_overlaps`] sweep settles every conflict in one deterministic
//! pass, and [`colorize`] then interleaves escaped gap text with styled
//! spans. Concatenating the emitted segments (before escaping) always
//! reconstructs the input exactly — no character is dropped or duplicated.

use std::fmt::Write;

use dekode_theme::{Style, StyleMap};

use crate::token::{Token, TokenKind};

// ---------------------------------------------------------------------------
// Overlap resolution
// ---------------------------------------------------------------------------

/// Reduce a start-sorted token list to disjoint spans.
///
/// A cursor walks forward from 0. A token starting before the cursor is
/// covered by something already kept and is discarded whole; a kept token
/// advances the cursor to its end. For equal starts the earlier list entry
/// wins, and the tokenizer's stable sort puts the lower-table-index rule
/// earlier — so the tie-break is "first rule in the table".
#[must_use]
pub fn resolve_overlaps(tokens: Vec<Token>) -> Vec<Token> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut cursor = 0;

    for token in tokens {
        if token.start < cursor {
            continue;
        }
        cursor = token.end;
        kept.push(token);
    }

    kept
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// HTML-escape all five reserved characters: `&`, `<`, `>`, `"`, `'`.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Emission
// ---------------------------------------------------------------------------

/// First style-map hit among the kind's candidate scopes.
fn style_for(kind: TokenKind, map: &StyleMap) -> Option<&Style> {
    kind.scope_candidates()
        .iter()
        .find_map(|scope| map.get(scope))
}

/// Emit escaped text with styled spans for the (disjoint, sorted) tokens.
///
/// Gap text between tokens comes from `code` itself. A token whose kind
/// resolves to no style — or to an empty one — is emitted as plain escaped
/// text, so degraded highlighting still yields complete output.
#[must_use]
pub fn colorize(code: &str, tokens: &[Token], map: &StyleMap) -> String {
    let mut out = String::with_capacity(code.len());
    let mut cursor = 0;

    for token in tokens {
        if token.start > cursor {
            out.push_str(&escape(&code[cursor..token.start]));
        }

        let escaped = escape(&token.text);
        match style_for(token.kind, map) {
            Some(style) if !style.is_empty() => {
                let _ = write!(out, "<span style=\"{}\">{escaped}</span>", style.css());
            }
            _ => out.push_str(&escaped),
        }

        cursor = token.end;
    }

    out.push_str(&escape(&code[cursor..]));
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
