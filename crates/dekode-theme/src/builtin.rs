//! Named preset themes — ready-to-use color schemes.
//!
//! The presets mirror the themes offered in the editor UI: VS Code's
//! Dark+ (the default), Monokai, and GitHub Light.

use std::collections::HashMap;

use crate::theme::{ScopeSelector, Theme, ThemeKind, TokenColor, TokenSettings};

/// Look up a builtin theme by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "default" | "dark-plus" => Some(dark_plus()),
        "monokai" => Some(monokai()),
        "github-light" => Some(github_light()),
        _ => None,
    }
}

/// List all available builtin theme names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "dark-plus", "monokai", "github-light"]
}

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

fn surfaces(background: &str, foreground: &str, line_number: &str) -> HashMap<String, String> {
    HashMap::from([
        ("editor.background".to_string(), background.to_string()),
        ("editor.foreground".to_string(), foreground.to_string()),
        (
            "editorLineNumber.foreground".to_string(),
            line_number.to_string(),
        ),
    ])
}

fn rule(scope: &str, foreground: &str) -> TokenColor {
    TokenColor {
        name: None,
        scope: ScopeSelector::One(scope.to_string()),
        settings: TokenSettings {
            foreground: Some(foreground.to_string()),
            ..TokenSettings::default()
        },
    }
}

fn styled_rule(scope: &str, foreground: &str, font_style: &str) -> TokenColor {
    TokenColor {
        name: None,
        scope: ScopeSelector::One(scope.to_string()),
        settings: TokenSettings {
            foreground: Some(foreground.to_string()),
            background: None,
            font_style: Some(font_style.to_string()),
        },
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// VS Code Dark+ — the default theme.
fn dark_plus() -> Theme {
    Theme {
        name: "Dark+ (default dark)".to_string(),
        kind: ThemeKind::Dark,
        colors: surfaces("#1e1e1e", "#d4d4d4", "#858585"),
        token_colors: vec![
            rule("keyword", "#569cd6"),
            rule("string", "#ce9178"),
            styled_rule("comment", "#6a9955", "italic"),
            rule("constant.numeric", "#b5cea8"),
            rule("entity.name.type", "#4ec9b0"),
            rule("entity.name.tag", "#569cd6"),
            rule("entity.other.attribute-name", "#9cdcfe"),
        ],
    }
}

/// Classic Monokai.
fn monokai() -> Theme {
    Theme {
        name: "Monokai".to_string(),
        kind: ThemeKind::Dark,
        colors: surfaces("#272822", "#f8f8f2", "#90908a"),
        token_colors: vec![
            rule("keyword", "#f92672"),
            styled_rule("storage.type", "#66d9ef", "italic"),
            rule("string", "#e6db74"),
            rule("comment", "#75715e"),
            rule("constant.numeric", "#ae81ff"),
            rule("entity.name.type", "#a6e22e"),
            rule("entity.name.tag", "#f92672"),
            rule("entity.other.attribute-name", "#a6e22e"),
            rule("keyword.operator", "#f92672"),
            rule("support.type.property-name", "#66d9ef"),
            rule("support.constant.property-value", "#ae81ff"),
        ],
    }
}

/// GitHub's light scheme.
fn github_light() -> Theme {
    Theme {
        name: "GitHub Light".to_string(),
        kind: ThemeKind::Light,
        colors: surfaces("#ffffff", "#24292e", "#959da5"),
        token_colors: vec![
            rule("keyword", "#d73a49"),
            rule("string", "#032f62"),
            rule("comment", "#6a737d"),
            rule("constant.numeric", "#005cc5"),
            rule("entity.name.type", "#6f42c1"),
            rule("entity.name.tag", "#22863a"),
            rule("entity.other.attribute-name", "#6f42c1"),
            rule("keyword.operator", "#d73a49"),
            rule("support.type.property-name", "#005cc5"),
            rule("support.constant.property-value", "#032f62"),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::StyleMap;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            assert!(builtin_theme(name).is_some(), "builtin '{name}' missing");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_theme("solarized").is_none());
        assert!(builtin_theme("").is_none());
    }

    #[test]
    fn default_is_dark_plus() {
        let a = builtin_theme("default").unwrap();
        let b = builtin_theme("dark-plus").unwrap();
        assert_eq!(a.name, b.name);
        assert_eq!(a.token_colors.len(), b.token_colors.len());
    }

    #[test]
    fn dark_plus_keyword_color() {
        let map = StyleMap::from_theme(&builtin_theme("dark-plus").unwrap());
        assert_eq!(map.get("keyword").unwrap().color.as_deref(), Some("#569cd6"));
        assert_eq!(map.background, "#1e1e1e");
    }

    #[test]
    fn dark_plus_comment_is_italic() {
        let theme = builtin_theme("dark-plus").unwrap();
        let comment = theme
            .token_colors
            .iter()
            .find(|rule| rule.scope.iter().any(|scope| scope == "comment"))
            .unwrap();
        assert_eq!(comment.settings.font_style.as_deref(), Some("italic"));
    }

    #[test]
    fn github_light_is_light() {
        assert_eq!(builtin_theme("github-light").unwrap().kind, ThemeKind::Light);
    }

    #[test]
    fn monokai_surfaces() {
        let map = StyleMap::from_theme(&builtin_theme("monokai").unwrap());
        assert_eq!(map.background, "#272822");
        assert_eq!(map.foreground, "#f8f8f2");
        assert_eq!(map.line_number, "#90908a");
    }

    #[test]
    fn presets_are_distinct() {
        let dark = StyleMap::from_theme(&builtin_theme("dark-plus").unwrap());
        let light = StyleMap::from_theme(&builtin_theme("github-light").unwrap());
        assert_ne!(
            dark.get("keyword").unwrap().color,
            light.get("keyword").unwrap().color
        );
    }
}
