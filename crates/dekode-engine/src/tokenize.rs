//! Tokenization — per-language regex rule tables.
//!
//! Each language has an ordered table of `(kind, pattern)` rules. Every
//! rule scans the *entire* text independently, emitting one token per
//! non-overlapping match; the combined list is then stably sorted by start
//! offset. Nothing here resolves overlaps between rules — a keyword inside
//! a comment produces both a comment token and a keyword token. That is
//! contractual: the colorizer's forward sweep picks winners, and because
//! the sort is stable over table order, an earlier rule beats a later one
//! at the same offset.
//!
//! Languages without a dedicated table borrow the javascript rules, which
//! cover the common keyword/string/comment/number shape well enough for a
//! cosmetic highlight.

use std::sync::LazyLock;

use regex::Regex;

use crate::language::Language;
use crate::token::{Token, TokenKind};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// One table entry. `group` selects which capture group becomes the token
/// span — 0 (the whole match) everywhere except the two CSS rules that
/// were lookaheads in spirit: there the trailing context is matched but
/// excluded from the span.
struct Rule {
    kind: TokenKind,
    pattern: &'static str,
    group: usize,
}

const fn rule(kind: TokenKind, pattern: &'static str) -> Rule {
    Rule { kind, pattern, group: 0 }
}

const fn group_rule(kind: TokenKind, pattern: &'static str) -> Rule {
    Rule { kind, pattern, group: 1 }
}

const JAVASCRIPT_RULES: &[Rule] = &[
    rule(
        TokenKind::Keyword,
        r"\b(?:const|let|var|function|if|else|for|while|return|import|export|class|extends|async|await|try|catch|finally)\b",
    ),
    rule(
        TokenKind::String,
        r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`(?:\\.|[^`\\])*`"#,
    ),
    rule(TokenKind::Comment, r"//[^\n]*|/\*[\s\S]*?\*/"),
    rule(TokenKind::Number, r"\b\d+\.?\d*\b"),
    rule(TokenKind::Operator, r"[+\-*/%=<>!&|]+"),
    rule(TokenKind::Punctuation, r"[{}\[\]();,.:]"),
];

const TYPESCRIPT_RULES: &[Rule] = &[
    rule(
        TokenKind::Keyword,
        r"\b(?:const|let|var|function|if|else|for|while|return|import|export|class|extends|interface|type|enum|async|await|try|catch|finally|public|private|protected)\b",
    ),
    rule(
        TokenKind::Type,
        r"\b(?:string|number|boolean|object|any|void|never|unknown)\b",
    ),
    rule(
        TokenKind::String,
        r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`(?:\\.|[^`\\])*`"#,
    ),
    rule(TokenKind::Comment, r"//[^\n]*|/\*[\s\S]*?\*/"),
    rule(TokenKind::Number, r"\b\d+\.?\d*\b"),
    rule(TokenKind::Operator, r"[+\-*/%=<>!&|]+"),
    rule(TokenKind::Punctuation, r"[{}\[\]();,.:]"),
];

const PYTHON_RULES: &[Rule] = &[
    rule(
        TokenKind::Keyword,
        r"\b(?:def|class|if|elif|else|for|while|return|import|from|try|except|finally|with|as|lambda|yield|async|await)\b",
    ),
    rule(
        TokenKind::String,
        r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#,
    ),
    rule(TokenKind::Comment, r"#[^\n]*"),
    rule(TokenKind::Number, r"\b\d+\.?\d*\b"),
    rule(TokenKind::Operator, r"[+\-*/%=<>!&|]+"),
    rule(TokenKind::Punctuation, r"[{}\[\]();,.:]"),
];

const HTML_RULES: &[Rule] = &[
    rule(
        TokenKind::Tag,
        r#"</?[\w-]+(?:\s+[\w-]+(?:=(?:"[^"]*"|'[^']*'|[^\s>]+))?)*\s*/?>"#,
    ),
    rule(TokenKind::Attribute, r"\s[\w-]+="),
    rule(
        TokenKind::String,
        r#"=\s*"(?:\\.|[^"\\])*"|=\s*'(?:\\.|[^'\\])*'"#,
    ),
    rule(TokenKind::Comment, r"<!--[\s\S]*?-->"),
];

const CSS_RULES: &[Rule] = &[
    group_rule(
        TokenKind::Selector,
        r"([.#]?[\w-]+(?:\s*[>+~]\s*[\w-]+)*)\s*\{",
    ),
    group_rule(TokenKind::Property, r"\b([\w-]+)\s*:"),
    rule(TokenKind::Value, r":\s*[^;{]+"),
    rule(TokenKind::Comment, r"/\*[\s\S]*?\*/"),
    rule(TokenKind::Punctuation, r"[{}();:,]"),
];

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

struct CompiledRule {
    kind: TokenKind,
    regex: Regex,
    group: usize,
}

fn compile(rules: &[Rule]) -> Vec<CompiledRule> {
    rules
        .iter()
        .map(|rule| CompiledRule {
            kind: rule.kind,
            regex: Regex::new(rule.pattern).expect("token rule pattern"),
            group: rule.group,
        })
        .collect()
}

static JAVASCRIPT: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| compile(JAVASCRIPT_RULES));
static TYPESCRIPT: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| compile(TYPESCRIPT_RULES));
static PYTHON: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| compile(PYTHON_RULES));
static HTML: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| compile(HTML_RULES));
static CSS: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| compile(CSS_RULES));

fn rules_for(language: Language) -> &'static [CompiledRule] {
    match language {
        Language::Typescript => &TYPESCRIPT,
        Language::Python => &PYTHON,
        Language::Html => &HTML,
        Language::Css => &CSS,
        _ => &JAVASCRIPT,
    }
}

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Tokenize `code` with the rule table for `language`.
///
/// Returns tokens sorted by start offset (stable, so table order breaks
/// ties). The list is *not* overlap-free — see the module docs.
#[must_use]
pub fn tokenize(code: &str, language: Language) -> Vec<Token> {
    let mut tokens = Vec::new();

    for rule in rules_for(language) {
        if rule.group == 0 {
            for found in rule.regex.find_iter(code) {
                tokens.push(Token {
                    kind: rule.kind,
                    text: found.as_str().to_string(),
                    start: found.start(),
                    end: found.end(),
                });
            }
        } else {
            for captures in rule.regex.captures_iter(code) {
                if let Some(found) = captures.get(rule.group) {
                    tokens.push(Token {
                        kind: rule.kind,
                        text: found.as_str().to_string(),
                        start: found.start(),
                        end: found.end(),
                    });
                }
            }
        }
    }

    tokens.sort_by_key(|token| token.start);
    tokens
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_at(tokens: &[Token], start: usize) -> Vec<TokenKind> {
        tokens
            .iter()
            .filter(|token| token.start == start)
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("", Language::Javascript).is_empty());
        assert!(tokenize("", Language::Css).is_empty());
    }

    #[test]
    fn javascript_keywords() {
        let tokens = tokenize("const x = 1;", Language::Javascript);
        let keyword = tokens
            .iter()
            .find(|token| token.kind == TokenKind::Keyword)
            .unwrap();
        assert_eq!(keyword.text, "const");
        assert_eq!(keyword.start, 0);
        assert_eq!(keyword.end, 5);
    }

    #[test]
    fn javascript_string_with_escapes() {
        let tokens = tokenize(r#"let s = "a \" b";"#, Language::Javascript);
        let string = tokens
            .iter()
            .find(|token| token.kind == TokenKind::String)
            .unwrap();
        assert_eq!(string.text, r#""a \" b""#);
    }

    #[test]
    fn javascript_template_string() {
        let tokens = tokenize("let s = `hi ${name}`;", Language::Javascript);
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::String && token.text.starts_with('`')));
    }

    #[test]
    fn javascript_comments() {
        let tokens = tokenize("// line\n/* block */", Language::Javascript);
        let comments: Vec<_> = tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Comment)
            .collect();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "// line");
        assert_eq!(comments[1].text, "/* block */");
    }

    #[test]
    fn javascript_numbers() {
        let tokens = tokenize("let x = 42 + 3.14;", Language::Javascript);
        let numbers: Vec<_> = tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Number)
            .map(|token| token.text.as_str())
            .collect();
        assert_eq!(numbers, vec!["42", "3.14"]);
    }

    #[test]
    fn sorted_by_start() {
        let tokens = tokenize("function f() { return 1; }", Language::Javascript);
        let starts: Vec<_> = tokens.iter().map(|token| token.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn overlaps_survive_tokenization() {
        // A keyword inside a comment yields both tokens; resolution is the
        // colorizer's job.
        let tokens = tokenize("// return here", Language::Javascript);
        assert!(tokens.iter().any(|token| token.kind == TokenKind::Comment));
        assert!(tokens.iter().any(|token| token.kind == TokenKind::Keyword));
    }

    #[test]
    fn table_order_breaks_ties() {
        // In CSS both the value rule (table index 2) and the punctuation
        // rule (index 4) match at the colon. The stable sort keeps the
        // earlier rule's token first, so it wins the colorizer sweep.
        let tokens = tokenize(".a { color: red; }", Language::Css);
        let colon = tokens
            .iter()
            .find(|token| token.kind == TokenKind::Value)
            .unwrap()
            .start;
        assert_eq!(
            kinds_at(&tokens, colon),
            vec![TokenKind::Value, TokenKind::Punctuation]
        );
    }

    #[test]
    fn typescript_types() {
        let tokens = tokenize("let x: string = 'a';", Language::Typescript);
        let ty = tokens
            .iter()
            .find(|token| token.kind == TokenKind::Type)
            .unwrap();
        assert_eq!(ty.text, "string");
    }

    #[test]
    fn typescript_interface_keyword() {
        let tokens = tokenize("interface Props {}", Language::Typescript);
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::Keyword && token.text == "interface"));
    }

    #[test]
    fn python_rules() {
        let tokens = tokenize("def f():\n    # note\n    return 1", Language::Python);
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::Keyword && token.text == "def"));
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::Comment && token.text == "# note"));
    }

    #[test]
    fn html_tags_and_attributes() {
        let tokens = tokenize(r#"<a href="x">link</a>"#, Language::Html);
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::Tag && token.text.starts_with("<a")));
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::Tag && token.text == "</a>"));
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::Attribute && token.text.contains("href")));
    }

    #[test]
    fn css_selector_span_excludes_brace() {
        let tokens = tokenize(".button { color: red; }", Language::Css);
        let selector = tokens
            .iter()
            .find(|token| token.kind == TokenKind::Selector)
            .unwrap();
        assert_eq!(selector.text, ".button");
        assert_eq!(selector.start, 0);
    }

    #[test]
    fn css_property_and_value() {
        let tokens = tokenize(".a { color: red; }", Language::Css);
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::Property && token.text == "color"));
        assert!(tokens
            .iter()
            .any(|token| token.kind == TokenKind::Value && token.text.starts_with(':')));
    }

    #[test]
    fn unknown_language_uses_javascript_rules() {
        let rust_code = "const MAX: u32 = 10; // limit";
        let fallback = tokenize(rust_code, Language::Rust);
        let javascript = tokenize(rust_code, Language::Javascript);
        assert_eq!(fallback, javascript);
        assert!(fallback
            .iter()
            .any(|token| token.kind == TokenKind::Keyword && token.text == "const"));
    }

    #[test]
    fn token_text_matches_span() {
        let code = "function f() { return 'x'; }";
        for token in tokenize(code, Language::Javascript) {
            assert_eq!(&code[token.start..token.end], token.text);
        }
    }
}
