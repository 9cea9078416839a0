//! Tokens — tagged spans over the indented source.
//!
//! A [`Token`] is produced by one rule of one language table and never
//! mutated afterwards. Spans are half-open byte ranges into the indented
//! text; tokens from different rules may overlap until the colorizer's
//! sweep resolves them.

/// Coarse highlighting category of a token.
///
/// Kinds are engine-internal; themes speak in scope identifiers. The
/// bridge is [`TokenKind::scope_candidates`], tried in order against the
/// flattened style map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    Operator,
    Type,
    Punctuation,
    Tag,
    Attribute,
    Property,
    Value,
    Selector,
}

impl TokenKind {
    /// The kind's own identifier string — also its fallback scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Number => "number",
            Self::Operator => "operator",
            Self::Type => "type",
            Self::Punctuation => "punctuation",
            Self::Tag => "tag",
            Self::Attribute => "attribute",
            Self::Property => "property",
            Self::Value => "value",
            Self::Selector => "selector",
        }
    }

    /// Candidate theme scopes for this kind, most specific first.
    ///
    /// The first candidate present in the style map wins. Kinds without a
    /// dedicated mapping fall back to their own identifier string, so a
    /// theme can still target them by name.
    #[must_use]
    pub const fn scope_candidates(self) -> &'static [&'static str] {
        match self {
            Self::Keyword => &["keyword", "keyword.control", "storage.type"],
            Self::String => &["string", "string.quoted"],
            Self::Comment => &["comment", "comment.line", "comment.block"],
            Self::Number => &["constant.numeric"],
            Self::Operator => &["keyword.operator"],
            Self::Type => &["entity.name.type", "support.type"],
            Self::Tag => &["entity.name.tag"],
            Self::Attribute => &["entity.other.attribute-name"],
            Self::Property => &["support.type.property-name"],
            Self::Value => &["support.constant.property-value"],
            Self::Punctuation => &["punctuation"],
            Self::Selector => &["selector"],
        }
    }
}

/// One matched span: kind, raw text, and its half-open byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_candidates_ordered() {
        assert_eq!(
            TokenKind::Keyword.scope_candidates(),
            &["keyword", "keyword.control", "storage.type"]
        );
    }

    #[test]
    fn selector_falls_back_to_itself() {
        assert_eq!(TokenKind::Selector.scope_candidates(), &["selector"]);
        assert_eq!(TokenKind::Selector.as_str(), "selector");
    }

    #[test]
    fn every_kind_has_candidates() {
        let kinds = [
            TokenKind::Keyword,
            TokenKind::String,
            TokenKind::Comment,
            TokenKind::Number,
            TokenKind::Operator,
            TokenKind::Type,
            TokenKind::Punctuation,
            TokenKind::Tag,
            TokenKind::Attribute,
            TokenKind::Property,
            TokenKind::Value,
            TokenKind::Selector,
        ];
        for kind in kinds {
            assert!(!kind.scope_candidates().is_empty(), "{kind:?}");
        }
    }
}
