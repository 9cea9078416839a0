//! Language recognition — extension table first, content signatures second.
//!
//! Filename evidence always wins: a known extension decides the language
//! regardless of content. Only when the filename is absent or its extension
//! unknown do the content signatures run, in a fixed order where the first
//! match wins. The order is load-bearing because the patterns overlap —
//! most notably, the CSS brace-object heuristic fires on small JSON objects
//! and is deliberately tested before the JSON whole-document pattern.

use std::sync::LazyLock;

use regex::Regex;

/// A recognized source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Java,
    Cpp,
    C,
    Csharp,
    Php,
    Ruby,
    Go,
    Rust,
    Html,
    Css,
    Json,
    Xml,
    Sql,
    Bash,
    Markdown,
    /// Fallback when nothing matches — formats with zero tokens.
    Plaintext,
}

impl Language {
    /// Lowercase identifier string for this language.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Csharp => "csharp",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Sql => "sql",
            Self::Bash => "bash",
            Self::Markdown => "markdown",
            Self::Plaintext => "plaintext",
        }
    }

    /// Map a lowercased file extension to a language.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Some(match ext {
            "js" | "jsx" => Self::Javascript,
            "ts" | "tsx" => Self::Typescript,
            "py" => Self::Python,
            "java" => Self::Java,
            "cpp" => Self::Cpp,
            "c" => Self::C,
            "cs" => Self::Csharp,
            "php" => Self::Php,
            "rb" => Self::Ruby,
            "go" => Self::Go,
            "rs" => Self::Rust,
            "html" => Self::Html,
            "css" => Self::Css,
            "json" => Self::Json,
            "xml" => Self::Xml,
            "sql" => Self::Sql,
            "sh" => Self::Bash,
            "md" => Self::Markdown,
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Content signatures
// ---------------------------------------------------------------------------

/// Ordered content signatures. First match wins, so overlapping patterns
/// must keep this exact order (CSS before JSON, XML after HTML).
static SIGNATURES: LazyLock<Vec<(Regex, Language)>> = LazyLock::new(|| {
    [
        (r#"import\s+.*from\s+['"]"#, Language::Javascript),
        (r"interface\s+\w+|type\s+\w+\s*=", Language::Typescript),
        (r"def\s+\w+\(|import\s+\w+|from\s+\w+\s+import", Language::Python),
        (r"public\s+class\s+\w+|import\s+java\.", Language::Java),
        (r"#include\s*<|int\s+main\s*\(", Language::Cpp),
        (r"using\s+System;|namespace\s+\w+", Language::Csharp),
        (r"<\?php|<\?=", Language::Php),
        (r"func\s+\w+\(|package\s+main", Language::Go),
        (r"fn\s+\w+\(|use\s+std::", Language::Rust),
        (r"(?i)<html|<!DOCTYPE\s+html", Language::Html),
        (r#"\{\s*["\w-]+\s*:\s*[^}]+\}"#, Language::Css),
        (r"^\s*\{[\s\S]*\}\s*$", Language::Json),
        (r"<\?xml|<\w+[^>]*>", Language::Xml),
        (r"(?i)SELECT\s+.*FROM|CREATE\s+TABLE", Language::Sql),
    ]
    .into_iter()
    .map(|(pattern, language)| {
        (Regex::new(pattern).expect("content signature pattern"), language)
    })
    .collect()
});

/// Recognize the language of `code`, optionally hinted by a filename.
///
/// Pure function of its inputs; never fails — unmatched input is
/// [`Language::Plaintext`].
#[must_use]
pub fn recognize(code: &str, filename: Option<&str>) -> Language {
    if let Some(name) = filename {
        // Substring after the last '.', or the whole name if there is none.
        let ext = name.rsplit('.').next().unwrap_or(name).to_lowercase();
        if let Some(language) = Language::from_extension(&ext) {
            return language;
        }
    }

    for (signature, language) in SIGNATURES.iter() {
        if signature.is_match(code) {
            return *language;
        }
    }

    Language::Plaintext
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
